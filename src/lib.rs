//! # Possort
//!
//! `possort` sorts large collections of fixed-length alphanumeric key records
//! ("position codes") with three classical algorithms — **quicksort**,
//! **mergesort**, and **LSD radix sort** — so their running times can be
//! compared on identical data.
//!
//! ## Key Features
//!
//! - **Fixed-length keys**: [`Poscode`] stores its characters inline in a
//!   `[u8; N]`, so keys are `Copy`, comparisons are plain byte comparisons,
//!   and the radix engine derives its pass count from the type instead of a
//!   magic constant.
//! - **Three engines, one contract**: each of [`quick_sort`], [`merge_sort`],
//!   and [`radix_sort`] sorts a `&mut [Poscode<N>]` in place; none calls
//!   another, so measurements stay honest.
//! - **Arena-backed radix buckets**: the counting passes chain input indices
//!   through one flat arena with sentinel links, avoiding per-node heap
//!   allocation while keeping each pass stable.
//!
//! ## Usage
//!
//! ```rust
//! use possort::{Poscode, radix_sort};
//!
//! let mut codes: Vec<Poscode> = ["B2C001", "A1B002", "B2C000"]
//!     .iter()
//!     .map(|s| Poscode::try_from(*s).unwrap())
//!     .collect();
//!
//! radix_sort(&mut codes);
//!
//! let sorted: Vec<&[u8]> = codes.iter().map(|c| c.as_bytes()).collect();
//! assert_eq!(sorted, vec![b"A1B002", b"B2C000", b"B2C001"]);
//! ```
//!
//! Loading codes from a line-oriented file and checking the result:
//!
//! ```rust,no_run
//! use possort::{CODE_LENGTH, Poscode, quick_sort, io, stats};
//!
//! # fn main() -> Result<(), possort::io::ReadError> {
//! let mut codes: Vec<Poscode<CODE_LENGTH>> = io::read_codes("codes_500K.txt", 500_000)?;
//! quick_sort(&mut codes);
//! assert!(stats::is_sorted(&codes));
//! # Ok(())
//! # }
//! ```
//!
//! ## Algorithm Characteristics
//!
//! | Engine         | Time       | Extra space        | Stable |
//! |----------------|------------|--------------------|--------|
//! | [`quick_sort`] | O(N log N) expected | O(log N) stack | no  |
//! | [`merge_sort`] | O(N log N) | one buffer of N keys | yes |
//! | [`radix_sort`] | O(N · L)   | one buffer of N keys + chain arena | yes |
//!
//! All engines are synchronous and single-threaded; auxiliary storage is
//! owned by the call and released before it returns.

pub mod algo;
pub mod core;
pub mod io;
pub mod stats;

pub use algo::{merge_sort, quick_sort, radix_sort};
pub use core::{BUCKET_COUNT, CODE_LENGTH, CodeError, Poscode, bucket_index};

pub mod prelude {
    pub use crate::algo::{merge_sort, quick_sort, radix_sort};
    pub use crate::core::{BUCKET_COUNT, CODE_LENGTH, CodeError, Poscode, bucket_index};
    pub use crate::io::{ReadError, read_codes};
    pub use crate::stats::{is_sorted, mean, std_deviation};
}
