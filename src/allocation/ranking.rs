//! Ranking and tie-band splitting of position awards

use crate::roster::TeamIndex;

/// One player's standing in a ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry<'a> {
    pub player: &'a str,
    pub team: TeamIndex,
    pub team_name: &'a str,
    pub points: i64,
}

/// Sort highest points first; ties by player name, then team name.
pub fn rank_entries(entries: &mut [RankedEntry<'_>]) {
    entries.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| a.player.cmp(b.player))
            .then_with(|| a.team_name.cmp(b.team_name))
    });
}

/// Split the award table over ranked entries, one share per entry paid.
///
/// Entries tied on points form a band. A band of `k` entries starting at
/// 0-based rank `base` shares the table amounts for ranks
/// `[base, base + k)`, clipped to `max_position`, each entry taking `1/k`
/// of the pool. Bands starting at or past `max_position` are not paid.
/// Table ranks with no amount count as zero.
///
/// `entries` must already be ranked with [`rank_entries`].
pub fn split_ranked_awards(
    entries: &[RankedEntry<'_>],
    table: &[f64],
    max_position: usize,
) -> Vec<(TeamIndex, f64)> {
    let cutoff = max_position.min(entries.len());
    let mut shares = Vec::new();

    let mut base = 0;
    while base < cutoff {
        let points = entries[base].points;
        let end = entries[base..]
            .iter()
            .position(|e| e.points != points)
            .map_or(entries.len(), |offset| base + offset);

        let band = &entries[base..end];
        let pool: f64 = (base..end.min(cutoff))
            .map(|rank| table.get(rank).copied().unwrap_or(0.0))
            .sum();
        let share = pool / band.len() as f64;

        shares.extend(band.iter().map(|e| (e.team, share)));
        base = end;
    }

    shares
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(player: &'static str, team: TeamIndex, points: i64) -> RankedEntry<'static> {
        RankedEntry {
            player,
            team,
            team_name: ["A", "B", "C", "D"][team],
            points,
        }
    }

    #[test]
    fn test_rank_entries_orders_by_points_then_name() {
        let mut entries = vec![
            entry("Suzie", 1, 40),
            entry("Holla", 0, 55),
            entry("Chandak", 0, 40),
            entry("Parjun", 1, 61),
        ];
        rank_entries(&mut entries);

        let order: Vec<_> = entries.iter().map(|e| e.player).collect();
        assert_eq!(order, vec!["Parjun", "Holla", "Chandak", "Suzie"]);
    }

    #[test]
    fn test_rank_entries_same_name_breaks_on_team() {
        let mut entries = vec![entry("Sam", 1, 10), entry("Sam", 0, 10)];
        rank_entries(&mut entries);

        assert_eq!(entries[0].team, 0);
    }

    #[test]
    fn test_no_ties() {
        let entries = vec![entry("a", 0, 30), entry("b", 1, 20), entry("c", 2, 10)];
        let shares = split_ranked_awards(&entries, &[3.0, 2.0, 1.0], 3);

        assert_eq!(shares, vec![(0, 3.0), (1, 2.0), (2, 1.0)]);
    }

    #[test]
    fn test_two_tied_for_first() {
        let entries = vec![entry("a", 0, 30), entry("b", 1, 30), entry("c", 2, 10)];
        let shares = split_ranked_awards(&entries, &[3.0, 2.0, 1.0], 3);

        assert_eq!(shares, vec![(0, 2.5), (1, 2.5), (2, 1.0)]);
    }

    #[test]
    fn test_band_straddling_cutoff_only_pools_paid_ranks() {
        let entries = vec![
            entry("a", 0, 30),
            entry("b", 1, 20),
            entry("c", 2, 20),
            entry("d", 3, 20),
        ];
        let shares = split_ranked_awards(&entries, &[3.0, 2.0, 1.0], 3);

        assert_eq!(shares, vec![(0, 3.0), (1, 1.0), (2, 1.0), (3, 1.0)]);
    }

    #[test]
    fn test_players_past_cutoff_get_nothing() {
        let entries = vec![
            entry("a", 0, 40),
            entry("b", 1, 30),
            entry("c", 2, 20),
            entry("d", 3, 10),
        ];
        let shares = split_ranked_awards(&entries, &[3.0, 2.0, 1.0], 2);

        assert_eq!(shares, vec![(0, 3.0), (1, 2.0)]);
    }

    #[test]
    fn test_everyone_tied() {
        let entries = vec![entry("a", 0, 5), entry("b", 1, 5), entry("c", 2, 5), entry("d", 3, 5)];
        let shares = split_ranked_awards(&entries, &[3.0, 2.0, 1.0], 3);

        assert_eq!(shares.len(), 4);
        for (_, share) in shares {
            assert_eq!(share, 1.5);
        }
    }

    #[test]
    fn test_short_table_counts_missing_ranks_as_zero() {
        let entries = vec![entry("a", 0, 9), entry("b", 1, 8), entry("c", 2, 7)];
        let shares = split_ranked_awards(&entries, &[4.0], 3);

        assert_eq!(shares, vec![(0, 4.0), (1, 0.0), (2, 0.0)]);
    }

    #[test]
    fn test_fewer_entries_than_positions() {
        let entries = vec![entry("a", 0, 9)];
        let shares = split_ranked_awards(&entries, &[3.0, 2.0, 1.0], 3);

        assert_eq!(shares, vec![(0, 3.0)]);
    }

    #[test]
    fn test_no_entries() {
        assert!(split_ranked_awards(&[], &[3.0], 3).is_empty());
    }
}
