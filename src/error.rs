use crate::EXIT_FAILURE;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LwError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to install interrupt handler: {0}")]
    Handler(#[from] ctrlc::Error),
}

impl LwError {
    /// Process exit status for this error. Every error path terminates
    /// the process; nothing is recoverable mid-flow.
    pub fn code(&self) -> i32 {
        match self {
            Self::Io(_) | Self::Handler(_) => EXIT_FAILURE,
        }
    }
}
