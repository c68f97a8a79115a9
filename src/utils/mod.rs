pub mod error;
pub mod formats;
pub mod validation;

pub use error::{LoadError, PathError, ProcessError, UnknownFormat, ValidationError};
pub use formats::{ACCEPTED_INPUT_FORMATS, DEFAULT_OUTPUT_FORMAT, ImageFormat};
pub use validation::{is_valid, validate_input_path};
