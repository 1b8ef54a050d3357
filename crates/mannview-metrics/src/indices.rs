//! Citation index computation (h-index, g-index).
//!
//! Both indices sort a copy of the citation counts in descending order and
//! scan 1-based positions; the scan stops at the first failing position,
//! which is equivalent to taking the last satisfying one since both
//! predicates are prefix-closed over descending counts. Recomputed from
//! scratch on every filtered-list change; datasets are bounded by one
//! researcher's publication count, so no incremental maintenance is needed.

/// Largest `h` such that at least `h` publications have `citations >= h`.
pub fn h_index(citations: &[u32]) -> usize {
    let sorted = sorted_descending(citations);
    let mut h = 0;
    for (i, &count) in sorted.iter().enumerate() {
        if count as usize >= i + 1 {
            h = i + 1;
        } else {
            break;
        }
    }
    h
}

/// Largest `g` such that the top `g` publications hold at least `g^2`
/// citations in total.
pub fn g_index(citations: &[u32]) -> usize {
    let sorted = sorted_descending(citations);
    let mut total: u64 = 0;
    let mut g = 0;
    for (i, &count) in sorted.iter().enumerate() {
        total += count as u64;
        let position = (i + 1) as u64;
        if total >= position * position {
            g = i + 1;
        } else {
            break;
        }
    }
    g
}

fn sorted_descending(citations: &[u32]) -> Vec<u32> {
    let mut sorted = citations.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted
}
