use super::file_processor::FileProcessor;
use crate::config::ImageTypeTable;
use crate::tools::FileSystem;
use anyhow::{Context, Result};
use log::{debug, error, info};
use std::path::{Path, PathBuf};

/// 走訪來源資料夾（含子資料夾），把有 EXIF 拍攝時間的影像複製到
/// `dst/YYYY/YYYY-MM-DD--HH-MM-SS-原檔名`
pub struct DirWalker<'a> {
    fs: &'a dyn FileSystem,
    image_type_table: ImageTypeTable,
    source_dir: PathBuf,
    processor: FileProcessor<'a>,
}

impl<'a> DirWalker<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        image_type_table: ImageTypeTable,
        source_dir: impl Into<PathBuf>,
        destination_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fs,
            image_type_table,
            source_dir: source_dir.into(),
            processor: FileProcessor::new(fs, destination_dir),
        }
    }

    /// 只有走訪本身出錯才會中止；單一檔案失敗僅記錄後繼續
    pub fn walk(&self) -> Result<()> {
        let source = self.source_dir.display().to_string();
        let destination = self.processor.destination_dir().display().to_string();
        info!(source = source.as_str(), destination = destination.as_str(); "start sorting images");

        let mut copied = 0usize;
        let mut failed = 0usize;

        for entry in self.fs.walk(&self.source_dir) {
            let entry = entry
                .with_context(|| format!("failed to walk dir {}", self.source_dir.display()))?;

            if entry.is_dir {
                continue;
            }

            if !self.image_type_table.is_image_file(&entry.path) {
                debug!("skipping non-image file: {}", entry.path.display());
                continue;
            }

            if self.process_entry(&entry.path) {
                copied += 1;
            } else {
                failed += 1;
            }
        }

        info!(copied = copied, failed = failed; "walk finished");
        Ok(())
    }

    fn process_entry(&self, path: &Path) -> bool {
        let source = path.display().to_string();
        match self.processor.process(path) {
            Ok(destination) => {
                let destination = destination.display().to_string();
                info!(source = source.as_str(), destination = destination.as_str(); "image copied");
                true
            }
            Err(e) => {
                let reason = format!("{e:#}");
                error!(source = source.as_str(), error = reason.as_str(); "failed processing file");
                false
            }
        }
    }
}
