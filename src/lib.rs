
pub type Int = i64;

mod record;
pub use record::*;

mod instance;
pub use instance::*;

mod input;
pub use input::*;

mod error;
pub use error::*;

pub mod interrupt;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit status for usage and input errors.
pub const EXIT_FAILURE: i32 = 1;
/// Exit status after the interrupt report has been printed.
pub const EXIT_INTERRUPTED: i32 = 15;
