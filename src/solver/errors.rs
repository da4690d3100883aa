use thiserror::Error;

use crate::utils::InputError;

/// Errors returned before a search starts
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Input error: {0}")]
    InputError(#[from] InputError),
}
