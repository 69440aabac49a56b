mod error;
mod params;

pub use error::{ApiError, ErrorCode, ErrorResponse};
pub use params::split_path_tokens;
