//! Live team standings.
//!
//! Players are grouped by population. While a match is running the
//! standings are derived from player metrics:
//!
//! - alive score: the longest time alive of any member
//! - defeats: total player defeats of the members, halved
//! - gold and damage taken: summed over the members
//! - score: defeats plus alive score
//!
//! Teams are ranked by score, highest first, starting at rank 1.

use std::collections::BTreeMap;

use snapshot_core::EntityRecord;

use crate::registry::EntityCollection;

#[derive(Clone, Debug, PartialEq)]
pub struct TeamStanding {
    pub rank: usize,
    pub population: i32,
    /// Members counted, departed ones included when the registry keeps them.
    pub members: usize,
    pub alive_score: u32,
    pub defeats: f64,
    pub gold: u64,
    pub damage_taken: f64,
    pub score: f64,
}

#[derive(Default)]
struct Tally {
    members: usize,
    alive_score: u32,
    total_defeats: u64,
    gold: u64,
    damage_taken: f64,
}

impl Tally {
    fn add(&mut self, record: &EntityRecord) {
        let metrics = &record.metrics;
        self.members += 1;
        self.alive_score = self.alive_score.max(metrics.time_alive);
        self.total_defeats += u64::from(metrics.player_defeats);
        self.gold += u64::from(metrics.gold);
        self.damage_taken += metrics.damage_taken;
    }

    fn into_standing(self, population: i32) -> TeamStanding {
        let defeats = self.total_defeats as f64 / 2.0;
        TeamStanding {
            rank: 0,
            population,
            members: self.members,
            alive_score: self.alive_score,
            defeats,
            gold: self.gold,
            damage_taken: self.damage_taken,
            score: defeats + f64::from(self.alive_score),
        }
    }
}

/// Standings over every tracked player with a known population.
pub fn standings(players: &EntityCollection) -> Vec<TeamStanding> {
    let mut tallies: BTreeMap<i32, Tally> = BTreeMap::new();
    for (_, record, _) in players.iter_retained() {
        if let Some(population) = record.population() {
            tallies.entry(population).or_default().add(record);
        }
    }

    rank(
        tallies
            .into_iter()
            .map(|(population, tally)| tally.into_standing(population))
            .collect(),
    )
}

/// Sorts by score descending and numbers the result from 1. Equal scores
/// keep population order.
pub fn rank(mut standings: Vec<TeamStanding>) -> Vec<TeamStanding> {
    standings.sort_by(|a, b| b.score.total_cmp(&a.score));
    for (index, standing) in standings.iter_mut().enumerate() {
        standing.rank = index + 1;
    }
    standings
}
