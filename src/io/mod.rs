pub mod json_source;
pub mod source;
