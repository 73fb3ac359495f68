//! Typed player dataset and its derived columns.
//!
//! ```text
//! RawTable ──resolve_columns──▶ Dataset ──derive──▶ DerivedDataset
//!  (text)                       (typed)             (+ Attacking Prowess,
//!                                                      Normalized Wage)
//! ```
//!
//! Loading fails only on unreadable input or a missing required column.
//! Cells that are not numbers become missing values and are recorded as
//! [`CoercionWarning`]s.

use std::path::Path;

use crate::error::{CoercionWarning, LoadResult};
use crate::models::{DerivedPlayer, Player};
use crate::parser::{parse_bytes_auto, parse_file_auto, ParseResult, RawRow};
use crate::validation::{resolve_columns, ColumnMap};

/// Name of the derived attacking prowess column.
pub const ATTACKING_PROWESS: &str = "Attacking Prowess";

/// Name of the derived normalized wage column.
pub const NORMALIZED_WAGE: &str = "Normalized Wage";

/// Cell texts read as missing values rather than invalid numbers.
const NA_TOKENS: [&str; 11] = [
    "NA", "N/A", "n/a", "NaN", "nan", "-nan", "NULL", "null", "None", "#N/A", "<NA>",
];

/// Where the data came from.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceInfo {
    pub encoding: String,
    pub delimiter: char,
    pub headers: Vec<String>,
}

/// Typed rows plus the raw table they were read from.
#[derive(Debug, Clone)]
pub struct Dataset {
    source: SourceInfo,
    players: Vec<Player>,
    raw_rows: Vec<RawRow>,
    warnings: Vec<CoercionWarning>,
}

/// A [`Dataset`] with attacking prowess and normalized wage computed.
#[derive(Debug, Clone)]
pub struct DerivedDataset {
    source: SourceInfo,
    columns: Vec<String>,
    rows: Vec<DerivedPlayer>,
    raw_rows: Vec<RawRow>,
    warnings: Vec<CoercionWarning>,
}

/// Load and type a CSV file.
pub fn load<P: AsRef<Path>>(path: P) -> LoadResult<Dataset> {
    let parsed = parse_file_auto(path)?;
    Dataset::from_parsed(parsed)
}

/// Load and type CSV content already in memory.
pub fn load_bytes(bytes: &[u8]) -> LoadResult<Dataset> {
    let parsed = parse_bytes_auto(bytes)?;
    Dataset::from_parsed(parsed)
}

/// Add the two derived columns. Row count and order are preserved.
pub fn derive(dataset: Dataset) -> DerivedDataset {
    let Dataset {
        source,
        players,
        raw_rows,
        mut warnings,
    } = dataset;

    let rows = players
        .into_iter()
        .map(|player| {
            let attacking_prowess =
                attacking_prowess(player.finishing, player.shot_power, player.positioning);
            let normalized_wage = match coerce_numeric(&player.wage_raw) {
                Numeric::Value(v) => Some(v),
                Numeric::Missing => None,
                Numeric::Invalid => {
                    warnings.push(CoercionWarning::new(
                        player.line,
                        crate::validation::WAGE,
                        player.wage_raw.clone(),
                    ));
                    None
                }
            };

            DerivedPlayer {
                player,
                attacking_prowess,
                normalized_wage,
            }
        })
        .collect();

    let mut columns = source.headers.clone();
    columns.push(ATTACKING_PROWESS.to_string());
    columns.push(NORMALIZED_WAGE.to_string());

    DerivedDataset {
        source,
        columns,
        rows,
        raw_rows,
        warnings,
    }
}

/// Arithmetic mean of the present inputs, `None` when all are missing.
pub fn attacking_prowess(
    finishing: Option<f64>,
    shot_power: Option<f64>,
    positioning: Option<f64>,
) -> Option<f64> {
    let present: Vec<f64> = [finishing, shot_power, positioning]
        .into_iter()
        .flatten()
        .collect();

    if present.is_empty() {
        None
    } else {
        Some(present.iter().sum::<f64>() / present.len() as f64)
    }
}

/// Outcome of reading a cell as a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Value(f64),
    /// Empty cell or a recognised NA marker.
    Missing,
    /// Text that is not a finite number.
    Invalid,
}

/// Best-effort numeric coercion of a cell.
pub fn coerce_numeric(raw: &str) -> Numeric {
    let text = raw.trim();
    if text.is_empty() || NA_TOKENS.contains(&text) {
        return Numeric::Missing;
    }

    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Numeric::Value(v),
        _ => Numeric::Invalid,
    }
}

impl Dataset {
    /// Validate the header and type every row.
    pub fn from_parsed(parsed: ParseResult) -> LoadResult<Self> {
        let ParseResult {
            table,
            encoding,
            delimiter,
        } = parsed;

        let columns = resolve_columns(&table.headers)?;

        let mut warnings = Vec::new();
        let players = table
            .rows
            .iter()
            .map(|row| read_player(row, &columns, &table.headers, &mut warnings))
            .collect();

        Ok(Self {
            source: SourceInfo {
                encoding,
                delimiter,
                headers: table.headers,
            },
            players,
            raw_rows: table.rows,
            warnings,
        })
    }

    pub fn source(&self) -> &SourceInfo {
        &self.source
    }

    pub fn columns(&self) -> &[String] {
        &self.source.headers
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn warnings(&self) -> &[CoercionWarning] {
        &self.warnings
    }
}

impl DerivedDataset {
    pub fn source(&self) -> &SourceInfo {
        &self.source
    }

    /// Source columns followed by the two derived ones.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[DerivedPlayer] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Warnings from both loading and deriving, in the order raised.
    pub fn warnings(&self) -> &[CoercionWarning] {
        &self.warnings
    }

    /// First `n` rows of the source table, all columns, as text.
    pub fn preview(&self, n: usize) -> Vec<Vec<String>> {
        self.raw_rows
            .iter()
            .take(n)
            .map(|row| row.cells.clone())
            .collect()
    }
}

fn read_player(
    row: &RawRow,
    columns: &ColumnMap,
    headers: &[String],
    warnings: &mut Vec<CoercionWarning>,
) -> Player {
    let text = |idx: usize| row.cells.get(idx).cloned().unwrap_or_default();

    let mut number = |idx: usize| -> Option<f64> {
        let raw = row.cells.get(idx).map(String::as_str).unwrap_or("");
        match coerce_numeric(raw) {
            Numeric::Value(v) => Some(v),
            Numeric::Missing => None,
            Numeric::Invalid => {
                warnings.push(CoercionWarning::new(row.line, headers[idx].clone(), raw));
                None
            }
        }
    };

    Player {
        line: row.line,
        full_name: text(columns.full_name),
        club_name: text(columns.club_name),
        nationality: text(columns.nationality),
        overall: number(columns.overall),
        finishing: number(columns.finishing),
        shot_power: number(columns.shot_power),
        positioning: number(columns.positioning),
        international_reputation: number(columns.international_reputation),
        skill_moves: number(columns.skill_moves),
        wage_raw: text(columns.wage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CsvError, DataLoadError, SchemaError};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Known As,Full Name,Overall,Club Name,Nationality,Finishing,Shot Power,Positioning,International Reputation,Wage(in Euro),Skill Moves";

    fn csv(rows: &[&str]) -> String {
        let mut out = HEADER.to_string();
        for row in rows {
            out.push('\n');
            out.push_str(row);
        }
        out
    }

    #[test]
    fn test_attacking_prowess_mean() {
        assert_eq!(attacking_prowess(Some(50.0), Some(70.0), Some(60.0)), Some(60.0));
    }

    #[test]
    fn test_attacking_prowess_skips_missing() {
        assert_eq!(attacking_prowess(Some(50.0), None, Some(70.0)), Some(60.0));
        assert_eq!(attacking_prowess(None, None, None), None);
    }

    #[test]
    fn test_coerce_numeric() {
        assert_eq!(coerce_numeric(" 115000 "), Numeric::Value(115000.0));
        assert_eq!(coerce_numeric("1.5e3"), Numeric::Value(1500.0));
        assert_eq!(coerce_numeric(""), Numeric::Missing);
        assert_eq!(coerce_numeric("N/A"), Numeric::Missing);
        assert_eq!(coerce_numeric("€115K"), Numeric::Invalid);
        assert_eq!(coerce_numeric("inf"), Numeric::Invalid);
        assert_eq!(coerce_numeric("-"), Numeric::Invalid);
    }

    #[test]
    fn test_dash_wage_warns_with_source_line() {
        let mut content = csv(&["A,Player A,80,Club A,Spain,70,70,60,1,1000,3"]);
        content.push_str("\n\nB,Player B,81,Club B,Spain,75,70,60,1,-,3");
        let derived = derive(load_bytes(content.as_bytes()).unwrap());

        assert_eq!(derived.len(), 2);
        assert_eq!(derived.rows()[1].normalized_wage, None);
        assert_eq!(
            derived.warnings(),
            &[CoercionWarning::new(4, "Wage(in Euro)", "-")]
        );
    }

    #[test]
    fn test_load_types_rows() {
        let content = csv(&[
            "L. Messi,Lionel Andrés Messi Cuccittini,91,Paris Saint-Germain,Argentina,90,86,93,5,195000,4",
        ]);
        let dataset = load_bytes(content.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 1);
        let player = &dataset.players()[0];
        assert_eq!(player.line, 2);
        assert_eq!(player.full_name, "Lionel Andrés Messi Cuccittini");
        assert_eq!(player.club_name, "Paris Saint-Germain");
        assert_eq!(player.overall, Some(91.0));
        assert_eq!(player.skill_moves, Some(4.0));
        assert_eq!(player.wage_raw, "195000");
        assert!(dataset.warnings().is_empty());
    }

    #[test]
    fn test_invalid_rating_warns_and_continues() {
        let content = csv(&[
            "A,Player A,80,Club A,Spain,eighty,70,60,1,1000,3",
            "B,Player B,81,Club B,Spain,75,70,60,1,1000,3",
        ]);
        let dataset = load_bytes(content.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.players()[0].finishing, None);
        assert_eq!(
            dataset.warnings(),
            &[CoercionWarning::new(2, "Finishing", "eighty")]
        );
    }

    #[test]
    fn test_derive_adds_two_columns_and_keeps_rows() {
        let content = csv(&[
            "A,Player A,80,Club A,Spain,50,70,60,1,1000,3",
            "B,Player B,81,Club B,Italy,,,,2,not paid,5",
            "C,Player C,82,,Brazil,90,90,90,3,,1",
        ]);
        let dataset = load_bytes(content.as_bytes()).unwrap();
        let column_count = dataset.columns().len();

        let derived = derive(dataset);

        assert_eq!(derived.len(), 3);
        assert_eq!(derived.columns().len(), column_count + 2);
        assert_eq!(derived.columns()[column_count], ATTACKING_PROWESS);
        assert_eq!(derived.columns()[column_count + 1], NORMALIZED_WAGE);

        let rows = derived.rows();
        assert_eq!(rows[0].attacking_prowess, Some(60.0));
        assert_eq!(rows[0].normalized_wage, Some(1000.0));
        assert_eq!(rows[1].attacking_prowess, None);
        assert_eq!(rows[1].normalized_wage, None);
        assert_eq!(rows[2].normalized_wage, None);

        // Empty wage is missing; text wage is missing and warned
        assert_eq!(
            derived.warnings(),
            &[CoercionWarning::new(3, "Wage(in Euro)", "not paid")]
        );
    }

    #[test]
    fn test_preview_returns_raw_cells() {
        let content = csv(&[
            "A,Player A,80,Club A,Spain,50,70,60,1,1000,3",
            "B,Player B,81,Club B,Italy,50,70,60,2,2000,5",
        ]);
        let derived = derive(load_bytes(content.as_bytes()).unwrap());

        let preview = derived.preview(1);
        assert_eq!(preview.len(), 1);
        assert_eq!(preview[0][0], "A");
        assert_eq!(preview[0].len(), 11);
        assert_eq!(derived.preview(10).len(), 2);
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let content = "Full Name,Club Name\nA,Club A";
        let err = load_bytes(content.as_bytes()).unwrap_err();

        match err {
            DataLoadError::Schema(SchemaError::MissingColumns(cols)) => {
                assert!(cols.contains(&"Nationality".to_string()));
                assert!(cols.contains(&"Skill Moves".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", csv(&["A,Player A,80,Club A,Spain,50,70,60,1,1000,3"])).unwrap();

        let dataset = load(file.path()).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.source().delimiter, ',');
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = load("no-such-dir/fifa23.csv").unwrap_err();
        assert!(matches!(err, DataLoadError::Csv(CsvError::Io { .. })));
        assert!(err.to_string().contains("no-such-dir/fifa23.csv"));
    }
}
