//! Header validation against the player dataset contract.
//!
//! The input file must carry at least the columns in [`REQUIRED_COLUMNS`],
//! spelled exactly. Extra columns are allowed and kept for the preview.
//!
//! # Example
//!
//! ```rust,ignore
//! use fifa_insights::validation::resolve_columns;
//!
//! let headers = vec!["Full Name".to_string(), "Club Name".to_string()];
//! let err = resolve_columns(&headers).unwrap_err();
//! println!("{}", err); // Missing required column(s): Nationality, Overall, ...
//! ```

use crate::error::SchemaError;

pub const FULL_NAME: &str = "Full Name";
pub const CLUB_NAME: &str = "Club Name";
pub const NATIONALITY: &str = "Nationality";
pub const OVERALL: &str = "Overall";
pub const FINISHING: &str = "Finishing";
pub const SHOT_POWER: &str = "Shot Power";
pub const POSITIONING: &str = "Positioning";
pub const INTERNATIONAL_REPUTATION: &str = "International Reputation";
pub const WAGE: &str = "Wage(in Euro)";
pub const SKILL_MOVES: &str = "Skill Moves";

/// Columns the pipeline reads, in contract order.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    FULL_NAME,
    CLUB_NAME,
    NATIONALITY,
    OVERALL,
    FINISHING,
    SHOT_POWER,
    POSITIONING,
    INTERNATIONAL_REPUTATION,
    WAGE,
    SKILL_MOVES,
];

/// Position of each required column in the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub full_name: usize,
    pub club_name: usize,
    pub nationality: usize,
    pub overall: usize,
    pub finishing: usize,
    pub shot_power: usize,
    pub positioning: usize,
    pub international_reputation: usize,
    pub wage: usize,
    pub skill_moves: usize,
}

/// Map every required column to its index.
///
/// All missing columns are reported together, in contract order.
/// If a name appears twice the first occurrence wins.
pub fn resolve_columns(headers: &[String]) -> Result<ColumnMap, SchemaError> {
    let find = |name: &str| headers.iter().position(|h| h == name);

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|name| find(**name).is_none())
        .map(|name| name.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(SchemaError::MissingColumns(missing));
    }

    let index = |name: &str| find(name).unwrap_or_default();

    Ok(ColumnMap {
        full_name: index(FULL_NAME),
        club_name: index(CLUB_NAME),
        nationality: index(NATIONALITY),
        overall: index(OVERALL),
        finishing: index(FINISHING),
        shot_power: index(SHOT_POWER),
        positioning: index(POSITIONING),
        international_reputation: index(INTERNATIONAL_REPUTATION),
        wage: index(WAGE),
        skill_moves: index(SKILL_MOVES),
    })
}

/// Check the header without keeping the mapping.
pub fn is_valid_header(headers: &[String]) -> bool {
    resolve_columns(headers).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_all_columns_resolved() {
        let mut names: Vec<&str> = REQUIRED_COLUMNS.to_vec();
        names.reverse();
        names.insert(0, "Known As");

        let map = resolve_columns(&headers(&names)).unwrap();
        assert_eq!(map.skill_moves, 1);
        assert_eq!(map.full_name, 10);
        assert!(is_valid_header(&headers(&names)));
    }

    #[test]
    fn test_missing_columns_reported_in_order() {
        let hdrs = headers(&[FULL_NAME, NATIONALITY, FINISHING, SHOT_POWER, POSITIONING, WAGE]);

        let err = resolve_columns(&hdrs).unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingColumns(vec![
                CLUB_NAME.to_string(),
                OVERALL.to_string(),
                INTERNATIONAL_REPUTATION.to_string(),
                SKILL_MOVES.to_string(),
            ])
        );
    }

    #[test]
    fn test_names_are_exact() {
        let mut names: Vec<&str> = REQUIRED_COLUMNS.to_vec();
        names[8] = "Wage (in Euro)";

        let err = resolve_columns(&headers(&names)).unwrap_err();
        assert_eq!(err, SchemaError::MissingColumns(vec![WAGE.to_string()]));
    }
}
