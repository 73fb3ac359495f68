//! FIFA insights CLI - dashboard server and one-shot reports
//!
//! ```bash
//! fifa-insights                                # Serve fifa23.csv on port 3000
//! fifa-insights serve --data players.csv       # Serve another file
//! fifa-insights report --top 5 -o report.json  # Compute the dashboard once
//! fifa-insights preview --rows 10              # Inspect the CSV as parsed
//! ```

use clap::{Args, Parser, Subcommand};
use fifa_insights::config::{DEFAULT_DATA_PATH, DEFAULT_PORT};
use fifa_insights::transform::format_delimiter;
use fifa_insights::{parse_file_auto, run_file, DashboardConfig, DashboardOptions, DashboardResponse};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fifa-insights")]
#[command(about = "Interactive dashboard over FIFA 23 player attributes", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Server options used when no subcommand is given
    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(Args, Debug, Clone, PartialEq)]
struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Player CSV file
    #[arg(short, long, env = "FIFA_DATA_PATH", default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// Directory holding the built frontend
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

impl ServeArgs {
    fn into_config(self) -> DashboardConfig {
        DashboardConfig {
            data_path: self.data,
            port: self.port,
            static_dir: self.static_dir,
            ..DashboardConfig::default()
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dashboard HTTP server
    Serve(ServeArgs),

    /// Compute the dashboard once and write it as JSON
    Report {
        /// Player CSV file
        #[arg(short, long, env = "FIFA_DATA_PATH", default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,

        /// Entries kept in each view
        #[arg(short, long, default_value = "10")]
        top: usize,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show how the CSV file is read: encoding, separator, columns, first rows
    Preview {
        /// Player CSV file
        #[arg(short, long, env = "FIFA_DATA_PATH", default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,

        /// Number of rows to show
        #[arg(short, long, default_value = "5")]
        rows: usize,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Serve(args)) => cmd_serve(args.into_config()).await,

        Some(Commands::Report { data, top, output }) => cmd_report(&data, top, output.as_deref()),

        Some(Commands::Preview { data, rows }) => cmd_preview(&data, rows),

        None => cmd_serve(cli.serve.into_config()).await,
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(config: DashboardConfig) -> Result<(), Box<dyn std::error::Error>> {
    fifa_insights::server::start_server(config).await
}

fn cmd_report(data: &Path, top: usize, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Processing: {}", data.display());

    let options = DashboardOptions {
        top_n: top,
        ..DashboardOptions::default()
    };
    let dashboard = run_file(data, &options)?;

    eprintln!("   Rows: {}", dashboard.csv_info.row_count);
    eprintln!("   Warnings: {}", dashboard.warnings.total);
    eprintln!(
        "   Clubs with a 5-star skiller: {}",
        dashboard.five_star.club_count
    );

    let json = serde_json::to_string_pretty(&DashboardResponse::from(&dashboard))?;
    write_output(&json, output)?;

    eprintln!("\n✨ Done!");
    Ok(())
}

fn cmd_preview(data: &Path, rows: usize) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Parsing CSV: {}", data.display());

    let parsed = parse_file_auto(data)?;
    eprintln!("   Encoding: {}", parsed.encoding);
    eprintln!("   Delimiter: '{}'", format_delimiter(parsed.delimiter));
    eprintln!("   Columns: {}", parsed.table.headers.len());
    eprintln!("✅ Parsed {} rows", parsed.table.rows.len());

    let first: Vec<&Vec<String>> = parsed.table.rows.iter().take(rows).map(|r| &r.cells).collect();
    let json = serde_json::to_string_pretty(&json!({
        "encoding": parsed.encoding,
        "delimiter": format_delimiter(parsed.delimiter),
        "columns": parsed.table.headers,
        "rows": first,
    }))?;
    println!("{}", json);

    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("   💾 Saved to: {}", p.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_and_serve_share_arguments() {
        let bare = Cli::try_parse_from(["fifa-insights", "--port", "8080", "--data", "players.csv"]).unwrap();
        assert!(bare.command.is_none());

        let serve =
            Cli::try_parse_from(["fifa-insights", "serve", "--port", "8080", "--data", "players.csv"]).unwrap();
        let Some(Commands::Serve(args)) = serve.command else {
            panic!("expected serve");
        };

        assert_eq!(args.port, 8080);
        assert_eq!(args.data, PathBuf::from("players.csv"));
        assert_eq!(bare.serve.port, args.port);
        assert_eq!(bare.serve.data, args.data);
    }

    #[test]
    fn test_invalid_port_rejected_on_both_paths() {
        assert!(Cli::try_parse_from(["fifa-insights", "--port", "not-a-port"]).is_err());
        assert!(Cli::try_parse_from(["fifa-insights", "serve", "--port", "not-a-port"]).is_err());
    }

    #[test]
    fn test_report_arguments() {
        let cli = Cli::try_parse_from(["fifa-insights", "report", "--data", "p.csv", "--top", "3"]).unwrap();
        let Some(Commands::Report { data, top, output }) = cli.command else {
            panic!("expected report");
        };

        assert_eq!(data, PathBuf::from("p.csv"));
        assert_eq!(top, 3);
        assert!(output.is_none());
    }
}
