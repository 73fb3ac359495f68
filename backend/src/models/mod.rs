//! Domain models for the FIFA insights pipeline.
//!
//! - [`Player`] - One typed row of the dataset
//! - [`DerivedPlayer`] - A player plus the two derived columns
//! - [`AggregationView`] - Sorted, truncated group → value series
//! - [`PlayerProjection`] - Row shape of the top attackers table
//! - [`FiveStarSummary`] - Five-star skill clubs count plus its view

use serde::{Deserialize, Serialize};

// =============================================================================
// Records
// =============================================================================

/// One player row. Numeric fields are `None` when the cell is empty or not a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Source line (header is line 1).
    pub line: usize,
    pub full_name: String,
    /// Empty when the player has no club.
    pub club_name: String,
    pub nationality: String,
    pub overall: Option<f64>,
    pub finishing: Option<f64>,
    pub shot_power: Option<f64>,
    pub positioning: Option<f64>,
    pub international_reputation: Option<f64>,
    pub skill_moves: Option<f64>,
    /// Wage cell as written in the file.
    pub wage_raw: String,
}

/// A player with the derived columns filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedPlayer {
    #[serde(flatten)]
    pub player: Player,
    /// Mean of finishing, shot power and positioning.
    pub attacking_prowess: Option<f64>,
    /// Wage coerced to a number.
    pub normalized_wage: Option<f64>,
}

impl DerivedPlayer {
    /// Project onto the columns shown in the top attackers table.
    pub fn projection(&self) -> PlayerProjection {
        PlayerProjection {
            full_name: self.player.full_name.clone(),
            club_name: self.player.club_name.clone(),
            nationality: self.player.nationality.clone(),
            attacking_prowess: self.attacking_prowess,
            overall: self.player.overall,
        }
    }
}

// =============================================================================
// Views
// =============================================================================

/// One labeled value of a view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewEntry {
    pub label: String,
    pub value: f64,
}

impl ViewEntry {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Group key → scalar, sorted descending and truncated to the top N.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregationView {
    pub entries: Vec<ViewEntry>,
}

impl AggregationView {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    /// Value for a label, if present.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries.iter().find(|e| e.label == label).map(|e| e.value)
    }
}

impl From<Vec<(String, f64)>> for AggregationView {
    fn from(pairs: Vec<(String, f64)>) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(label, value)| ViewEntry { label, value })
                .collect(),
        }
    }
}

/// Row of the top attackers table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProjection {
    pub full_name: String,
    pub club_name: String,
    pub nationality: String,
    pub attacking_prowess: Option<f64>,
    pub overall: Option<f64>,
}

/// Clubs with at least one five-star skill moves player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiveStarSummary {
    /// Distinct clubs with at least one qualifying player.
    pub club_count: usize,
    /// Top clubs by number of qualifying players.
    pub view: AggregationView,
}
