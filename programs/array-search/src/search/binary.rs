/// Interval-halving presence check over an ascending slice.
///
/// # Precondition
///
/// `sequence` must be sorted ascending. Unsorted input is not detected: the
/// call still terminates without panicking, but the answer is meaningless.
///
/// # Interval
///
/// The candidate interval is kept half-open as `[low, high)`, which is the
/// inclusive `low..=high - 1` interval expressed without ever stepping below
/// index zero. `mid` is the floor midpoint computed as `low + (high - low) / 2`
/// so the sum never overflows for large bounds.
///
/// When several elements equal `target`, whichever one the probe lands on
/// first ends the search. Only presence is reported.
///
/// Worst case *O*(log *n*) comparisons.
///
/// ```
/// use array_search::binary_search;
///
/// let arr = [4, 10, 12, 13, 20, 50, 66];
/// assert!(binary_search(&arr, &4));
/// assert!(!binary_search(&arr, &40));
/// ```
#[inline]
pub fn binary_search<T: Ord>(sequence: &[T], target: &T) -> bool {
    let mut low = 0usize;
    let mut high = sequence.len();

    while low < high {
        let mid = low + (high - low) / 2;
        let probe = &sequence[mid];

        if probe == target {
            return true;
        }

        if probe < target {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    false
}
