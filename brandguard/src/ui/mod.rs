// brandguard/src/ui/mod.rs
//! Terminal output helpers: colored status messages, diffs and the repair summary.

pub mod diff_viewer;
pub mod output_format;
pub mod summary;
