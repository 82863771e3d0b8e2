//! Leaderboard ranking.

use std::cmp::Ordering;

use crate::models::{LeaderboardEntry, RankedEntry};

/// Order entries into a ranked leaderboard.
///
/// Primary order is `power` descending. Equal powers fall back to the
/// `tiebreak_key` ascending; entries without one keep their original
/// relative order (stable sort). Ranks follow
/// competition ranking: a tie group (equal power and equal tiebreak key)
/// shares the 1-based position of its first member, and the entry after
/// the group takes its own position, so ranks skip after ties.
///
/// Power values are assumed finite and non-negative (caller-validated);
/// `f64::total_cmp` keeps the order total regardless.
pub fn rank<T>(mut entries: Vec<LeaderboardEntry<T>>) -> Vec<RankedEntry<T>> {
    entries.sort_by(compare);

    let mut ranked: Vec<RankedEntry<T>> = Vec::with_capacity(entries.len());
    for (position, entry) in entries.into_iter().enumerate() {
        let placement_rank = match ranked.last() {
            Some(previous) if ties(&previous.entry, &entry) => previous.placement_rank,
            _ => position as u32 + 1,
        };
        ranked.push(RankedEntry {
            placement_rank,
            entry,
        });
    }
    ranked
}

fn compare<T>(a: &LeaderboardEntry<T>, b: &LeaderboardEntry<T>) -> Ordering {
    // Option's Ord keeps the comparator total: absent keys compare equal
    // to each other (stable sort preserves input order) and sort ahead of
    // present ones.
    b.power
        .total_cmp(&a.power)
        .then_with(|| a.tiebreak_key.cmp(&b.tiebreak_key))
}

fn ties<T>(a: &LeaderboardEntry<T>, b: &LeaderboardEntry<T>) -> bool {
    a.power == b.power && a.tiebreak_key == b.tiebreak_key
}
