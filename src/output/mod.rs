//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_audit_result, print_check_result, print_grid, print_match, print_play_outcome,
    print_shuffle_result,
};
