/// Stable insertion sort over a slice, ordering by `less`.
///
/// Each element is swapped leftward past every element it is strictly less
/// than, so equal elements keep their relative order.
pub(crate) fn insertion_sort<T, F>(v: &mut [T], mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && less(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Bubble sort into non-increasing order.
///
/// Every pass bubbles the smallest remaining element to the back; the sort
/// stops early after a pass that makes no swap.
pub(crate) fn bubble_sort_descending<T: Ord>(v: &mut [T]) {
    let mut end = v.len();
    while end > 1 {
        let mut swapped = false;
        for j in 1..end {
            if v[j - 1] < v[j] {
                v.swap(j - 1, j);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        end -= 1;
    }
}
