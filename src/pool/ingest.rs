//! CSV ingestion: joins a salary table and a projection table into a
//! [`PlayerPool`].
//!
//! Cost rows are keyed by `(Name, TeamAbbrev, Position)`; projection rows by
//! `(Name, Team, Position)`. Team defenses are joined on team and position
//! only, because projection sources do not agree on defense names; the name
//! is taken from the salary table. Rows that do not join are dropped.

use super::types::{Player, PlayerPool, Position};
use crate::error::Result;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct CostRow {
    #[serde(rename = "Position")]
    position: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Salary")]
    salary: u32,
    #[serde(rename = "TeamAbbrev")]
    team: String,
}

#[derive(Debug, Deserialize)]
struct ProjectionRow {
    #[serde(rename = "Position")]
    position: String,
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Team")]
    team: String,
    #[serde(rename = "Fpts", default)]
    fpts: Option<f64>,
    #[serde(rename = "Ownership", default)]
    ownership: Option<String>,
}

#[derive(Debug, Clone, Copy)]
struct Projection {
    fpts: f64,
    ownership: Option<f64>,
}

/// Counts of rows that did not make it into the pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Salary rows kept.
    pub joined: usize,
    /// Salary rows without a matching projection row.
    pub unmatched: usize,
    /// Rows (either table) whose position label is not recognized.
    pub unknown_position: usize,
    /// Joined rows dropped because the name was already in the pool.
    pub duplicate_names: usize,
    /// Projection rows with a blank `Fpts`.
    pub missing_projection: usize,
}

/// Loads and joins the two CSV files.
pub fn load_pool(
    salaries: impl AsRef<Path>,
    projections: impl AsRef<Path>,
) -> Result<PlayerPool> {
    let salaries = std::fs::File::open(salaries.as_ref())?;
    let projections = std::fs::File::open(projections.as_ref())?;
    let (pool, _) = read_pool(salaries, projections)?;
    Ok(pool)
}

/// Joins a salary table and a projection table read from arbitrary readers.
///
/// Skill-position rows come first in salary-table order, followed by team
/// defenses in salary-table order.
pub fn read_pool<S: Read, P: Read>(
    salaries: S,
    projections: P,
) -> Result<(PlayerPool, IngestStats)> {
    let mut stats = IngestStats::default();

    let mut skill: HashMap<(String, String, Position), Projection> = HashMap::new();
    let mut defense: HashMap<(String, Position), Projection> = HashMap::new();

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(projections);
    for row in reader.deserialize::<ProjectionRow>() {
        let row = row?;
        let position = match row.position.parse::<Position>() {
            Ok(p) => p,
            Err(_) => {
                debug!("Skipping projection row with position {:?}", row.position);
                stats.unknown_position += 1;
                continue;
            }
        };
        let Some(fpts) = row.fpts else {
            debug!(name = %row.name, team = %row.team, "Skipping projection row without Fpts");
            stats.missing_projection += 1;
            continue;
        };
        let projection = Projection {
            fpts,
            ownership: row.ownership.as_deref().and_then(parse_percentage),
        };
        if position == Position::DST {
            defense.entry((row.team, position)).or_insert(projection);
        } else {
            skill
                .entry((row.name, row.team, position))
                .or_insert(projection);
        }
    }

    let mut players = Vec::new();
    let mut defenses = Vec::new();

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(salaries);
    for row in reader.deserialize::<CostRow>() {
        let row = row?;
        let position = match row.position.parse::<Position>() {
            Ok(p) => p,
            Err(_) => {
                debug!("Skipping salary row with position {:?}", row.position);
                stats.unknown_position += 1;
                continue;
            }
        };

        let projection = if position == Position::DST {
            defense.get(&(row.team.clone(), position)).copied()
        } else {
            skill
                .get(&(row.name.clone(), row.team.clone(), position))
                .copied()
        };

        let Some(projection) = projection else {
            debug!(name = %row.name, team = %row.team, %position, "No projection for player");
            stats.unmatched += 1;
            continue;
        };

        let player = Player {
            name: row.name,
            position,
            salary: row.salary,
            projection: projection.fpts,
            team: row.team,
            ownership: projection.ownership,
        };
        if position == Position::DST {
            defenses.push(player);
        } else {
            players.push(player);
        }
    }
    players.extend(defenses);

    let mut seen = HashSet::new();
    players.retain(|p| {
        if seen.insert(p.name.clone()) {
            true
        } else {
            debug!(name = %p.name, "Dropping duplicate player name");
            stats.duplicate_names += 1;
            false
        }
    });
    stats.joined = players.len();

    info!(
        "Ingested {} players ({} unmatched, {} bad positions, {} duplicates, {} blank Fpts)",
        stats.joined,
        stats.unmatched,
        stats.unknown_position,
        stats.duplicate_names,
        stats.missing_projection
    );

    Ok((PlayerPool::new(players), stats))
}

/// Parses `"12.5"` or `"12.5%"`; blank means unknown.
fn parse_percentage(raw: &str) -> Option<f64> {
    let trimmed = raw.trim().trim_end_matches('%').trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}
