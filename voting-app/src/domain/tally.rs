use serde::{Deserialize, Serialize};

/// Vote count for one candidate, already normalized from whichever field
/// name the counting endpoint used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteTally {
    pub id: Option<String>,
    pub label: String,
    pub votes: u64,
}

/// A tally entry with its share of the total, ready for a bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TallyShare {
    pub id: Option<String>,
    pub label: String,
    pub votes: u64,
    pub percentage: f64,
}

impl TallyShare {
    pub fn percentage_label(&self) -> String {
        format_percentage(self.percentage)
    }

    /// CSS width for the bar, clamped to the drawable range.
    pub fn bar_width(&self) -> String {
        format!("width: {:.1}%", self.percentage.clamp(0.0, 100.0))
    }
}

/// Placeholder shown instead of a board with no entries.
pub const NO_RESULTS: &str = "No results yet.";

/// Saturates at `u64::MAX` rather than overflowing on absurd counts.
pub fn total_votes(tallies: &[VoteTally]) -> u64 {
    tallies.iter().fold(0u64, |sum, t| sum.saturating_add(t.votes))
}

/// What a results board draws: one share per entry plus the total.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub shares: Vec<TallyShare>,
    pub total: u64,
}

/// `None` when there is nothing to draw and [`NO_RESULTS`] should show.
pub fn board(tallies: &[VoteTally]) -> Option<Board> {
    if tallies.is_empty() {
        return None;
    }

    Some(Board {
        shares: shares(tallies),
        total: total_votes(tallies),
    })
}

/// Each entry's percentage of the total. A zero total yields 0 for every
/// entry. Rounding happens only at display time, so the shown values need
/// not add up to exactly 100.
pub fn shares(tallies: &[VoteTally]) -> Vec<TallyShare> {
    let total = total_votes(tallies);

    tallies
        .iter()
        .map(|t| TallyShare {
            id: t.id.clone(),
            label: t.label.clone(),
            votes: t.votes,
            percentage: percentage(t.votes, total),
        })
        .collect()
}

pub fn percentage(votes: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    votes as f64 / total as f64 * 100.0
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(label: &str, votes: u64) -> VoteTally {
        VoteTally {
            id: None,
            label: label.to_string(),
            votes,
        }
    }

    #[test]
    fn test_two_candidate_split() {
        let tallies = vec![tally("A", 3), tally("B", 1)];
        assert_eq!(total_votes(&tallies), 4);

        let shares = shares(&tallies);
        assert_eq!(shares[0].percentage, 75.0);
        assert_eq!(shares[1].percentage, 25.0);
        assert_eq!(shares[0].percentage_label(), "75.0%");
        assert_eq!(shares[1].percentage_label(), "25.0%");
    }

    #[test]
    fn test_zero_total_is_zero_percent() {
        let tallies = vec![tally("A", 0), tally("B", 0)];
        for share in shares(&tallies) {
            assert_eq!(share.percentage, 0.0);
            assert!(!share.percentage.is_nan());
        }
    }

    #[test]
    fn test_empty_list() {
        assert!(shares(&[]).is_empty());
        assert_eq!(total_votes(&[]), 0);
    }

    #[test]
    fn test_empty_list_shows_placeholder() {
        assert_eq!(board(&[]), None);
        assert_eq!(NO_RESULTS, "No results yet.");

        let drawn = board(&[tally("A", 2)]).unwrap();
        assert_eq!(drawn.total, 2);
        assert_eq!(drawn.shares[0].percentage_label(), "100.0%");
    }

    #[test]
    fn test_huge_counts_saturate() {
        let tallies = vec![tally("A", u64::MAX), tally("B", 1)];
        assert_eq!(total_votes(&tallies), u64::MAX);

        let shares = shares(&tallies);
        assert_eq!(shares[0].percentage_label(), "100.0%");
        assert_eq!(shares[1].percentage_label(), "0.0%");
    }

    #[test]
    fn test_thirds_round_independently() {
        let tallies = vec![
            tally("A", 1),
            tally("B", 1),
            tally("C", 1),
        ];
        let labels: Vec<String> = shares(&tallies).iter().map(|s| s.percentage_label()).collect();
        assert_eq!(labels, vec!["33.3%", "33.3%", "33.3%"]);
    }

    #[test]
    fn test_bar_width() {
        let share = TallyShare {
            id: None,
            label: "A".into(),
            votes: 2,
            percentage: 66.666,
        };
        assert_eq!(share.bar_width(), "width: 66.7%");
    }
}
