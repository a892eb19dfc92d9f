pub mod format;
pub mod json;
