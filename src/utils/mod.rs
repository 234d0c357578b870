pub mod error;
pub mod validation;
pub mod formats;
pub mod fs;

pub use error::{OptimizerError, OptimizerResult, PathError, ValidationError};
pub use validation::{validate_input_dir, validate_job};
pub use formats::{ImageFormat, format_from_extension, is_supported_image};
pub use fs::{
    get_file_size,
    to_kib,
    extract_filename,
    output_dir_for,
    create_dir_all,
    write_atomically,
};
