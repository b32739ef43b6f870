//! Arithmetic mean of a sequence of numbers.
//!
//! The values are summed in a single ordered pass and divided by their count,
//! always using floating point division, so integer input is never truncated.
//!
//! An empty input has no mean and is reported as [`Error::EmptyInput`].
//!
//! ```
//! use average::{calculate_average, write_report};
//!
//! let avg = calculate_average(&[1, 2, 3, 4, 5])?;
//! assert_eq!(3.0, avg);
//!
//! let mut out = vec![];
//! write_report(&mut out, avg)?;
//! assert_eq!(b"Average: 3.0\n", &*out);
//!
//! # Ok::<(), average::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs, clippy::cargo)]
#![deny(clippy::unwrap_used)]
#![warn(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]
#![warn(clippy::result_unit_err)]

mod agg;
mod error;
mod report;

pub use agg::avg::calculate_average;
pub use error::{Error, Result};
pub use report::write_report;

/// Value produced by an average
pub type Value = f64;
