//! The five dashboard views.
//!
//! Each view is a pure function of a [`DerivedDataset`]; none depends on
//! another, so they can run in any order.

use std::fmt;
use std::str::FromStr;

use crate::dataset::DerivedDataset;
use crate::models::{AggregationView, DerivedPlayer, FiveStarSummary, PlayerProjection};

use super::aggregate::{group_aggregate, sort_descending_by, top_n, AggregateOp};

/// Skill moves rating that qualifies a player as a five-star skiller.
pub const FIVE_STAR_SKILL_MOVES: f64 = 5.0;

/// Clubs ranked by mean international reputation.
pub fn top_clubs_by_reputation(data: &DerivedDataset, n: usize) -> AggregationView {
    let pairs = group_aggregate(
        data.rows(),
        |p| p.player.club_name.as_str(),
        |p| p.player.international_reputation,
        AggregateOp::Mean,
    );
    top_n(pairs, n)
}

/// Players ranked by attacking prowess; players without one come last.
pub fn top_players_by_attacking_prowess(data: &DerivedDataset, n: usize) -> Vec<PlayerProjection> {
    let mut ranked: Vec<&DerivedPlayer> = data.rows().iter().collect();
    sort_descending_by(&mut ranked, |p| p.attacking_prowess);

    ranked
        .into_iter()
        .take(n)
        .map(DerivedPlayer::projection)
        .collect()
}

/// Nationalities ranked by mean attacking prowess.
pub fn top_nations_by_attacking_prowess(data: &DerivedDataset, n: usize) -> AggregationView {
    let pairs = group_aggregate(
        data.rows(),
        |p| p.player.nationality.as_str(),
        |p| p.attacking_prowess,
        AggregateOp::Mean,
    );
    top_n(pairs, n)
}

/// Clubs ranked by total normalized wage. Missing wages add nothing.
pub fn top_clubs_by_total_wage(data: &DerivedDataset, n: usize) -> AggregationView {
    let pairs = group_aggregate(
        data.rows(),
        |p| p.player.club_name.as_str(),
        |p| p.normalized_wage,
        AggregateOp::Sum,
    );
    top_n(pairs, n)
}

/// Clubs with players whose skill moves rating is exactly five.
///
/// `club_count` covers every such club; the view keeps the top `n` by
/// number of qualifying players.
pub fn clubs_with_five_star_skill_moves(data: &DerivedDataset, n: usize) -> FiveStarSummary {
    let pairs = group_aggregate(
        data.rows()
            .iter()
            .filter(|p| p.player.skill_moves == Some(FIVE_STAR_SKILL_MOVES)),
        |p| p.player.club_name.as_str(),
        |_| None,
        AggregateOp::Count,
    );

    FiveStarSummary {
        club_count: pairs.len(),
        view: top_n(pairs, n),
    }
}

// ============================================================================
// View selection
// ============================================================================

/// One of the five dashboard views, addressable by a URL-safe name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    ClubReputation,
    TopAttackers,
    NationAttack,
    ClubWages,
    FiveStarSkillers,
}

impl ViewKind {
    pub const ALL: [ViewKind; 5] = [
        ViewKind::ClubReputation,
        ViewKind::TopAttackers,
        ViewKind::NationAttack,
        ViewKind::ClubWages,
        ViewKind::FiveStarSkillers,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewKind::ClubReputation => "club-reputation",
            ViewKind::TopAttackers => "top-attackers",
            ViewKind::NationAttack => "nation-attack",
            ViewKind::ClubWages => "club-wages",
            ViewKind::FiveStarSkillers => "five-star-skillers",
        }
    }

    /// Chart title shown above the view.
    pub fn title(self) -> &'static str {
        match self {
            ViewKind::ClubReputation => "Club Popularity (Avg International Reputation)",
            ViewKind::TopAttackers => "Top Players by Attacking Prowess",
            ViewKind::NationAttack => "Top Nations by Average Attacking Prowess",
            ViewKind::ClubWages => "Top Clubs by Total Wage (in Euro)",
            ViewKind::FiveStarSkillers => "Clubs with Players Having 5-Star Skill Moves",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown view '{}'", s))
    }
}
