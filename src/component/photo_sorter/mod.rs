//! 依拍攝時間整理照片
//!
//! 走訪來源資料夾，讀取 JPEG 的 EXIF 拍攝時間，複製到依日期命名的目標路徑

mod file_processor;
mod walker;

pub use file_processor::FileProcessor;
pub use walker::DirWalker;
