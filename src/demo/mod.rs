//! Console demos
//!
//! - `country_flags` - Flag, country and formatting for a fixed set of numbers
//! - `sorting` - Server-side sorting scenarios against a live backend

pub mod country_flags;
pub mod sorting;

pub use country_flags::{render_country_flags, DEMO_PHONES};
pub use sorting::{demonstrate_sorting, render_sorting, SortingReport, SORTING_EXAMPLES};
