use std::time::{Duration, Instant};

/// Requested output order. Selects the inclusive comparator installed by
/// [`merge_sort`]: `<=` for `Asc`, `>=` for `Desc`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Counters accumulated over one top-level sort call.
///
/// - `comparisons`: comparator invocations.
/// - `swaps`: elements placed by a comparison during merging. The bulk copy
///   of a run's tail after the other run is exhausted counts neither.
/// - `execution_time`: wall-clock duration of the whole call.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SortStats {
    pub comparisons: u64,
    pub swaps: u64,
    pub execution_time: Duration,
}

/// Stable merge sort over `data` in the requested order, in place.
///
/// Equal elements keep their original relative order: the merge step uses
/// an inclusive comparator, so ties are always taken from the left run.
pub fn merge_sort<T: Ord + Clone>(data: &mut [T], order: SortOrder) -> SortStats {
    match order {
        SortOrder::Asc => merge_sort_by(data, |a, b| a <= b),
        SortOrder::Desc => merge_sort_by(data, |a, b| a >= b),
    }
}

/// Stable merge sort with a caller-supplied comparator, in place.
///
/// `compare(a, b)` must return `true` when `a` should not be placed after
/// `b`. For the sort to be stable the predicate has to be inclusive, i.e.
/// return `true` for elements it considers equal.
pub fn merge_sort_by<T, F>(data: &mut [T], mut compare: F) -> SortStats
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut stats = SortStats::default();
    let start = Instant::now();
    sort_range(data, 0, data.len(), &mut compare, &mut stats);
    stats.execution_time = start.elapsed();
    stats
}

/// Recursively sorts `data[begin..end]`: split at the midpoint (the left
/// half gets the extra element for odd lengths), sort both halves, merge.
fn sort_range<T, F>(data: &mut [T], begin: usize, end: usize, compare: &mut F, stats: &mut SortStats)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if end - begin < 2 {
        return;
    }

    let middle = begin + (end - begin) / 2;

    sort_range(data, begin, middle, compare, stats);
    sort_range(data, middle, end, compare, stats);

    let merged = merge_runs(data, begin, middle, end, compare, stats);
    for (slot, value) in data[begin..end].iter_mut().zip(merged) {
        *slot = value;
    }
}

/// Merges the sorted runs `data[begin..middle]` and `data[middle..end]`
/// into a fresh buffer. Every comparison places exactly one element and
/// bumps both counters; once a run is exhausted the other run's tail is
/// appended without further counting.
fn merge_runs<T, F>(
    data: &[T],
    begin: usize,
    middle: usize,
    end: usize,
    compare: &mut F,
    stats: &mut SortStats,
) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(begin <= middle && middle <= end && end <= data.len());

    let mut merged = Vec::with_capacity(end - begin);
    let mut left = begin;
    let mut right = middle;

    while left < middle && right < end {
        stats.comparisons += 1;
        stats.swaps += 1;
        if compare(&data[left], &data[right]) {
            merged.push(data[left].clone());
            left += 1;
        } else {
            merged.push(data[right].clone());
            right += 1;
        }
    }

    merged.extend_from_slice(&data[left..middle]);
    merged.extend_from_slice(&data[right..end]);

    merged
}
