pub mod resume;
pub mod validate;
