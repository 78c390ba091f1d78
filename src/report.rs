//! Plain-text rendering of ranked lineups.

use crate::search::RankedLineup;

/// Renders lineups best first, numbered from 1.
///
/// ```text
/// Lineup 1:
///   RB    Christian McCaffrey   SF    9500   27.40
///   ...
///   Salary: 33400
///   118.35 Fpts
/// ```
pub fn render(lineups: &[RankedLineup]) -> String {
    let mut out = String::new();
    if lineups.is_empty() {
        out.push_str("No valid lineups.\n");
        return out;
    }

    let name_width = lineups
        .iter()
        .flat_map(|l| l.slots.iter().map(|s| s.name.chars().count()))
        .max()
        .unwrap_or(0);

    for (rank, lineup) in lineups.iter().enumerate() {
        out.push_str(&format!("Lineup {}:\n", rank + 1));
        for slot in &lineup.slots {
            out.push_str(&format!(
                "  {:<5} {:<width$}  {:<4} {:>6}  {:>6.2}\n",
                slot.label.to_string(),
                slot.name,
                slot.team,
                slot.salary,
                slot.projection,
                width = name_width,
            ));
        }
        out.push_str(&format!("  Salary: {}\n", lineup.total_salary));
        out.push_str(&format!("  {:.2} Fpts\n\n", lineup.total_projection));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Position;
    use crate::search::LineupSlot;
    use crate::slots::SlotLabel;

    fn lineup(names: &[&str], total: f64) -> RankedLineup {
        RankedLineup {
            slots: names
                .iter()
                .map(|n| LineupSlot {
                    label: SlotLabel::Flex,
                    name: n.to_string(),
                    position: Position::WR,
                    team: "KC".into(),
                    salary: 5000,
                    projection: total / names.len() as f64,
                })
                .collect(),
            total_salary: 5000 * names.len() as u64,
            total_projection: total,
        }
    }

    #[test]
    fn test_render_numbering() {
        let text = render(&[lineup(&["A", "B"], 30.0), lineup(&["C", "D"], 20.5)]);
        let first = text.find("Lineup 1:").unwrap();
        let second = text.find("Lineup 2:").unwrap();
        assert!(first < second);
        assert!(text.contains("30.00 Fpts"));
        assert!(text.contains("20.50 Fpts"));
        assert!(text.contains("Salary: 10000"));
        assert!(text.contains("FLEX"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "No valid lineups.\n");
    }
}
