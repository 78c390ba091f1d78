//! Removal of players by name.

use crate::pool::PlayerPool;
use std::collections::HashSet;
use tracing::debug;

/// Returns a pool without the players whose name exactly matches one of
/// `names`. Names that match nobody are ignored.
pub fn exclude_players<S: AsRef<str>>(pool: &PlayerPool, names: &[S]) -> PlayerPool {
    if names.is_empty() {
        return pool.clone();
    }

    let excluded: HashSet<&str> = names.iter().map(|n| n.as_ref()).collect();
    let mut matched: HashSet<&str> = HashSet::new();

    let kept: PlayerPool = pool
        .iter()
        .filter(|p| {
            if excluded.contains(p.name.as_str()) {
                matched.insert(p.name.as_str());
                false
            } else {
                true
            }
        })
        .cloned()
        .collect();

    for name in excluded.difference(&matched) {
        debug!(name = %name, "Excluded player not in pool");
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Player, Position};

    fn pool() -> PlayerPool {
        PlayerPool::new(vec![
            Player::new("Amari Cooper", Position::WR, 6000, 14.0, "DAL"),
            Player::new("Ezekiel Elliott", Position::RB, 7500, 18.0, "DAL"),
            Player::new("Tyler Lockett", Position::WR, 6500, 15.0, "SEA"),
        ])
    }

    #[test]
    fn test_exclude_by_name() {
        let out = exclude_players(&pool(), &["Amari Cooper", "Tyler Lockett"]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Ezekiel Elliott");
    }

    #[test]
    fn test_unmatched_names_ignored() {
        let out = exclude_players(&pool(), &["Nobody", "amari cooper"]);
        assert_eq!(out, pool());
    }

    #[test]
    fn test_empty_list() {
        let none: [&str; 0] = [];
        assert_eq!(exclude_players(&pool(), &none), pool());
    }
}
