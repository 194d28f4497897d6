//! Terminal output formatting

mod display;

pub use display::print_benchmark_report;
