//! Top-k merging of per-shard result sequences.

use crate::result::{ScoreOrder, Scored};

/// Merge per-shard sequences into one sequence of at most `k` items, highest
/// score first.
///
/// Sequences are concatenated in the order given and stable-sorted, so
/// equal scores keep shard order, then per-shard order.
pub fn merge_top_k<T, I>(sequences: I, k: usize) -> Vec<T>
where
    T: Scored,
    I: IntoIterator<Item = Vec<T>>,
{
    merge_top_k_by(sequences, k, ScoreOrder::Descending)
}

/// Like [`merge_top_k`] with an explicit score direction.
pub fn merge_top_k_by<T, I>(sequences: I, k: usize, order: ScoreOrder) -> Vec<T>
where
    T: Scored,
    I: IntoIterator<Item = Vec<T>>,
{
    let mut merged: Vec<T> = sequences.into_iter().flatten().collect();
    order.sort(&mut merged);
    merged.truncate(k);
    merged
}
