pub mod source;
pub mod viewport;
