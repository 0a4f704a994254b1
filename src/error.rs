use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid breakpoint width `{value}`")]
    InvalidWidth {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Invalid attribute `{0}`, expected name=value")]
    InvalidAttribute(String),
    #[error("--min-width, --max-width and --max-images must be given together")]
    IncompleteRange,
    #[error("Error serializing image attributes")]
    Json(#[from] serde_json::Error),
}
