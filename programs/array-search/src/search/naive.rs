/// Reports whether `target` occurs anywhere in `sequence`.
///
/// Scans left to right and stops at the first equal element. Places no
/// ordering requirement on `sequence`, so it also serves as the reference
/// answer for [`binary_search`](super::binary_search) on sorted input.
///
/// Worst case *O*(*n*) comparisons; an empty slice is never a match.
///
/// ```
/// use array_search::naive_search;
///
/// let arr = [11, 4, 30, 110, 20];
/// assert!(naive_search(&arr, &30));
/// assert!(!naive_search(&arr, &40));
/// ```
#[inline]
pub fn naive_search<T: PartialEq>(sequence: &[T], target: &T) -> bool {
    for element in sequence {
        if element == target {
            return true;
        }
    }
    false
}
