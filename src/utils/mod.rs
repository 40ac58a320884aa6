pub mod extractor;
pub mod file_magic;
pub mod jwt;
pub mod parameter_error_handler;
pub mod password;
pub mod random_code;
pub mod slug;
pub mod sql;
pub mod validate;

pub use extractor::{
    SafeApplicationIdI64, SafeCertificateSerial, SafeConferenceIdI64, SafeCourseIdI64,
    SafeEnrollmentIdI64, SafeIDI64, SafeMediaToken, SafeProjectIdI64, SafeScholarshipIdI64,
    SafeSlug, SafeTaskIdI64,
};
pub use file_magic::validate_magic_bytes;
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use random_code::generate_certificate_serial;
pub use slug::slugify;
pub use sql::escape_like_pattern;
