// Module declarations
pub mod maintenance;
pub mod run;

pub use maintenance::{handle_clean, handle_verify};
pub use run::handle_run;
