pub mod cached;
pub mod json_file;
pub mod memory;
