pub mod bench;
pub mod content;
pub mod debug_logger;
pub mod error;
pub mod file_io;
pub mod report;
pub mod reverse;
pub mod verify;


pub use bench::{run_default, run_matrix, RunSummary, SizeOutcome, SizeReport, VariantTiming};
pub use content::generate_content;
pub use error::{BenchError, Result};
pub use file_io::{read_file, write_file};
pub use report::ConsoleReporter;
pub use reverse::{hardware_concurrency, parallel_reverse, partition, sequential_reverse};
