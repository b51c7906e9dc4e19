// file: src/repository/mod.rs
// description: local document discovery module exports
// reference: Internal module structure

pub mod scanner;

pub use scanner::{FileScanner, ScannedFile};
