//! Terminal output formatting
//!
//! Game boards, state reports and benchmark summaries.

pub mod display;
pub mod formatters;

pub use display::{
    write_benchmark_result, write_board, write_opening, write_solved, write_state_report,
};
