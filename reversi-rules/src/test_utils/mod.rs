//! Utilities used for testing and benchmarking.

pub mod perft;
pub use perft::{perft_from, run_perft};
