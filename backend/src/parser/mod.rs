//! Generic CSV reader with encoding and delimiter auto-detection.
//!
//! Produces a [`RawTable`] of trimmed text cells. No player-specific logic here.

use std::path::Path;

use crate::error::{CsvError, CsvResult};

/// One data row with its source line number.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// 1-based line where the record starts (header is line 1).
    pub line: usize,
    /// Cell values, padded to the header width.
    pub cells: Vec<String>,
}

/// Header plus rows, all as text.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

/// Result of parsing with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed table
    pub table: RawTable,
    /// Detected or used encoding
    pub encoding: String,
    /// Detected or used delimiter
    pub delimiter: char,
}

/// Detect the encoding of raw bytes using chardet.
///
/// Valid UTF-8 is always reported as `utf-8`.
pub fn detect_encoding(bytes: &[u8]) -> String {
    if std::str::from_utf8(bytes).is_ok() {
        return "utf-8".to_string();
    }

    let result = chardet::detect(bytes);
    let charset = result.0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "" | "ascii" | "utf-8" | "utf8" | "utf-8-sig" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to string using the specified encoding
pub fn decode_content(bytes: &[u8], encoding: &str) -> CsvResult<String> {
    let decoded = match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => match std::str::from_utf8(bytes) {
            Ok(s) => s.to_string(),
            Err(_) => String::from_utf8_lossy(bytes).into_owned(),
        },
        "iso-8859-1" | "latin-1" | "latin1" => {
            let (text, _, had_errors) = encoding_rs::ISO_8859_15.decode(bytes);
            if had_errors {
                return Err(CsvError::Encoding(format!("invalid {} sequence", encoding)));
            }
            text.into_owned()
        }
        "windows-1252" | "cp1252" => {
            let (text, _, had_errors) = encoding_rs::WINDOWS_1252.decode(bytes);
            if had_errors {
                return Err(CsvError::Encoding(format!("invalid {} sequence", encoding)));
            }
            text.into_owned()
        }
        // Fallback: UTF-8 with lossy conversion
        _ => String::from_utf8_lossy(bytes).into_owned(),
    };

    Ok(decoded.trim_start_matches('\u{feff}').to_string())
}

/// Detect the delimiter by counting occurrences in the header line.
///
/// Comma wins ties and is the default when no candidate occurs.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [',', ';', '\t', '|'];
    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Parse CSV text with an explicit delimiter.
///
/// Quoted fields may contain the delimiter. Cells are trimmed, blank rows are
/// skipped and short rows are padded with empty cells.
///
/// # Example
/// ```ignore
/// use fifa_insights::parse_table;
///
/// let table = parse_table("name,club\nMessi,\"Paris Saint-Germain\"", ',').unwrap();
/// assert_eq!(table.headers, vec!["name", "club"]);
/// assert_eq!(table.rows[0].cells[1], "Paris Saint-Germain");
/// ```
pub fn parse_table(content: &str, delimiter: char) -> CsvResult<RawTable> {
    if content.trim().is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let delimiter = u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| CsvError::Parse {
            line: 1,
            message: format!("Unsupported delimiter '{}'", delimiter),
        })?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| CsvError::Parse {
            line: 1,
            message: format!("Cannot read header: {}", e),
        })?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(CsvError::NoHeaders);
    }

    let newlines = newline_offsets(content);
    let mut rows = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| CsvError::Parse {
            line: e.position().map_or(idx + 2, |p| p.line() as usize),
            message: e.to_string(),
        })?;

        if record.iter().all(str::is_empty) {
            continue;
        }

        let line = record
            .position()
            .map_or(idx + 2, |p| source_line(content, &newlines, p.byte() as usize));
        let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
        cells.resize(headers.len(), String::new());

        rows.push(RawRow { line, cells });
    }

    Ok(RawTable { headers, rows })
}

/// Byte offsets of every `\n` in `content`.
fn newline_offsets(content: &str) -> Vec<usize> {
    content
        .bytes()
        .enumerate()
        .filter_map(|(i, b)| (b == b'\n').then_some(i))
        .collect()
}

/// 1-based line on which the record starting near `byte` begins.
///
/// The reader reports the offset where it started looking, which sits before
/// any blank lines it skipped.
fn source_line(content: &str, newlines: &[usize], byte: usize) -> usize {
    let bytes = content.as_bytes();
    let mut start = byte.min(bytes.len());
    while start < bytes.len() && matches!(bytes[start], b'\r' | b'\n') {
        start += 1;
    }
    1 + newlines.partition_point(|&offset| offset < start)
}

/// Parse CSV bytes with auto-detection of encoding and delimiter.
pub fn parse_bytes_auto(bytes: &[u8]) -> CsvResult<ParseResult> {
    parse_bytes_with(bytes, None)
}

/// Parse CSV bytes, auto-detecting the encoding and, unless given, the delimiter.
pub fn parse_bytes_with(bytes: &[u8], delimiter: Option<char>) -> CsvResult<ParseResult> {
    if bytes.is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;
    let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(&content));
    let table = parse_table(&content, delimiter)?;

    Ok(ParseResult {
        table,
        encoding,
        delimiter,
    })
}

/// Parse a CSV file with auto-detection of encoding and delimiter.
///
/// # Example
/// ```ignore
/// let result = parse_file_auto("fifa23.csv")?;
/// println!("Encoding: {}, Delimiter: '{}'", result.encoding, result.delimiter);
/// println!("Rows: {}", result.table.rows.len());
/// ```
pub fn parse_file_auto<P: AsRef<Path>>(path: P) -> CsvResult<ParseResult> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| CsvError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_bytes_auto(&bytes)
}
