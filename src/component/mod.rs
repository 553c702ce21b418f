//! 功能元件模組

pub mod photo_sorter;

pub use photo_sorter::{DirWalker, FileProcessor};
