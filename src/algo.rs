//! The three sorting engines (quicksort, mergesort, LSD radix sort).
//!
//! All engines share the same contract: sort a mutable slice of
//! [`Poscode`]s in place, ordered non-decreasingly by lexicographic byte
//! comparison. Inputs shorter than two elements are a no-op. No engine
//! calls another; they exist side by side so their running times can be
//! compared on the same data.
//!
//! - [`quick_sort`]: in-place, O(log N) extra space, not stable.
//! - [`merge_sort`]: one auxiliary buffer of N keys, stable.
//! - [`radix_sort`]: one auxiliary buffer plus per-pass bucket chains,
//!   stable, one counting pass per code position.

use crate::core::{BUCKET_COUNT, BucketChains, Poscode, bucket_index};
use std::mem;

/// Sorts `codes` in place with median-of-three quicksort.
///
/// Partitioning is Lomuto-style around the median of the first, middle and
/// last element. After each partition the smaller side is handled by a
/// recursive call and the larger side by another loop iteration, which
/// bounds the recursion depth to O(log N) regardless of input order.
///
/// Not stable.
///
/// # Examples
///
/// ```
/// use possort::{Poscode, quick_sort};
///
/// let mut codes: Vec<Poscode> = ["B2C001", "A1B002", "B2C000"]
///     .iter()
///     .map(|s| Poscode::try_from(*s).unwrap())
///     .collect();
/// quick_sort(&mut codes);
///
/// assert_eq!(codes[0].data(), b"A1B002");
/// ```
pub fn quick_sort<const N: usize>(codes: &mut [Poscode<N>]) {
    if codes.len() < 2 {
        return;
    }
    let high = codes.len() - 1;
    quicksort_range(codes, 0, high);
}

/// Reorders `codes[low]`, `codes[mid]`, `codes[high]` so the median of the
/// three sits at `mid`, and returns `mid`.
fn median_of_three<const N: usize>(codes: &mut [Poscode<N>], low: usize, high: usize) -> usize {
    let mid = low + (high - low) / 2;

    if codes[mid] < codes[low] {
        codes.swap(mid, low);
    }
    if codes[high] < codes[low] {
        codes.swap(high, low);
    }
    if codes[high] < codes[mid] {
        codes.swap(high, mid);
    }

    mid
}

/// Lomuto partition of `codes[low..=high]` around the median-of-three
/// pivot. Returns the pivot's final index.
fn partition<const N: usize>(codes: &mut [Poscode<N>], low: usize, high: usize) -> usize {
    let pivot_index = median_of_three(codes, low, high);
    codes.swap(pivot_index, high);
    let pivot = codes[high];

    let mut i = low;
    for j in low..high {
        if codes[j] < pivot {
            codes.swap(i, j);
            i += 1;
        }
    }
    codes.swap(i, high);
    i
}

fn quicksort_range<const N: usize>(codes: &mut [Poscode<N>], mut low: usize, mut high: usize) {
    // Recurse into the smaller partition, iterate on the larger one. This
    // keeps the stack depth logarithmic; a plain two-way recursion would be
    // linear on adversarial inputs.
    while low < high {
        let pivot = partition(codes, low, high);

        if pivot > 0 && pivot - low < high - pivot {
            quicksort_range(codes, low, pivot - 1);
            low = pivot + 1;
        } else {
            quicksort_range(codes, pivot + 1, high);
            if pivot == 0 {
                // No left partition exists; `pivot - 1` would underflow.
                break;
            }
            high = pivot - 1;
        }
    }
}

/// Sorts `codes` in place with top-down mergesort.
///
/// A single auxiliary buffer of `codes.len()` keys is allocated once per
/// call and shared by every merge. Ties prefer the left run, so the sort
/// is stable.
///
/// # Examples
///
/// ```
/// use possort::{Poscode, merge_sort};
///
/// let mut codes: Vec<Poscode> = ["B2C001", "A1B002", "B2C000"]
///     .iter()
///     .map(|s| Poscode::try_from(*s).unwrap())
///     .collect();
/// merge_sort(&mut codes);
///
/// assert_eq!(codes[2].data(), b"B2C001");
/// ```
pub fn merge_sort<const N: usize>(codes: &mut [Poscode<N>]) {
    if codes.len() < 2 {
        return;
    }
    let mut buffer = vec![Poscode::default(); codes.len()];
    let high = codes.len() - 1;
    mergesort_range(codes, &mut buffer, 0, high);
}

fn mergesort_range<const N: usize>(
    codes: &mut [Poscode<N>],
    buffer: &mut [Poscode<N>],
    left: usize,
    right: usize,
) {
    if left >= right {
        return;
    }

    let mid = left + (right - left) / 2;
    mergesort_range(codes, buffer, left, mid);
    mergesort_range(codes, buffer, mid + 1, right);
    merge_sections(codes, buffer, left, mid, right);
}

/// Merges the sorted runs `codes[left..=mid]` and `codes[mid+1..=right]`
/// through `buffer` and copies the result back.
fn merge_sections<const N: usize>(
    codes: &mut [Poscode<N>],
    buffer: &mut [Poscode<N>],
    left: usize,
    mid: usize,
    right: usize,
) {
    let mut i = left;
    let mut j = mid + 1;
    let mut k = left;

    while i <= mid && j <= right {
        // `<=` keeps equal keys in their original order.
        if codes[i] <= codes[j] {
            buffer[k] = codes[i];
            i += 1;
        } else {
            buffer[k] = codes[j];
            j += 1;
        }
        k += 1;
    }

    while i <= mid {
        buffer[k] = codes[i];
        i += 1;
        k += 1;
    }

    while j <= right {
        buffer[k] = codes[j];
        j += 1;
        k += 1;
    }

    codes[left..=right].copy_from_slice(&buffer[left..=right]);
}

/// Sorts `codes` in place with least-significant-position radix sort.
///
/// Runs exactly `N` stable counting passes, from the rightmost code
/// position to the leftmost, ping-ponging between the caller's slice and
/// one auxiliary buffer. Each pass groups keys into 36 bucket chains by
/// the classified character at that position and re-collects the buckets
/// in ascending order; because appends preserve arrival order, every pass
/// is stable, and the composition sorts the full code.
///
/// There is no early termination: correctness relies on every key having
/// exactly `N` positions, which the [`Poscode`] type guarantees.
///
/// # Examples
///
/// ```
/// use possort::{Poscode, radix_sort};
///
/// let mut codes: Vec<Poscode> = ["B2C001", "A1B002", "B2C000"]
///     .iter()
///     .map(|s| Poscode::try_from(*s).unwrap())
///     .collect();
/// radix_sort(&mut codes);
///
/// let sorted: Vec<&[u8]> = codes.iter().map(|c| c.as_bytes()).collect();
/// assert_eq!(sorted, vec![b"A1B002", b"B2C000", b"B2C001"]);
/// ```
pub fn radix_sort<const N: usize>(codes: &mut [Poscode<N>]) {
    if codes.len() < 2 {
        return;
    }

    let mut buffer = codes.to_vec();
    let mut source: &mut [Poscode<N>] = codes;
    let mut destination: &mut [Poscode<N>] = &mut buffer;

    for position in (0..N).rev() {
        sort_by_position(source, destination, position);
        mem::swap(&mut source, &mut destination);
    }

    // With an odd number of passes the result sits in the auxiliary
    // buffer; move it back into the caller's storage.
    if N % 2 == 1 {
        destination.copy_from_slice(source);
    }
}

/// One stable counting pass: distributes `input` into bucket chains by the
/// classified byte at `position`, then drains buckets 0..36 in order into
/// `output`.
fn sort_by_position<const N: usize>(
    input: &[Poscode<N>],
    output: &mut [Poscode<N>],
    position: usize,
) {
    let mut chains = BucketChains::new(input.len());

    for (i, code) in input.iter().enumerate() {
        chains.push_back(bucket_index(code.get(position)), i);
    }

    let mut out = 0;
    for bucket in 0..BUCKET_COUNT {
        for index in chains.chain(bucket) {
            output[out] = input[index];
            out += 1;
        }
    }
}
