use crate::tools::{
    FileSystem, capture_time, copy_guarded, decode_metadata, destination_path,
};
use anyhow::{Context, Result};
use std::io::{BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// 處理單一影像：讀取拍攝時間並複製到依日期分層的目標資料夾
pub struct FileProcessor<'a> {
    fs: &'a dyn FileSystem,
    destination_dir: PathBuf,
}

impl<'a> FileProcessor<'a> {
    pub fn new(fs: &'a dyn FileSystem, destination_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            destination_dir: destination_dir.into(),
        }
    }

    #[must_use]
    pub fn destination_dir(&self) -> &Path {
        &self.destination_dir
    }

    /// 成功時回傳目標路徑；任何步驟失敗只影響這個檔案
    pub fn process(&self, path: &Path) -> Result<PathBuf> {
        let mut file = self
            .fs
            .open(path)
            .with_context(|| format!("failed opening file {}", path.display()))?;

        let metadata = decode_metadata(&mut BufReader::new(&mut file))
            .with_context(|| format!("failed parsing metadata {}", path.display()))?;
        let taken_at = capture_time(&metadata)
            .with_context(|| format!("failed getting timestamp {}", path.display()))?;

        let destination = destination_path(&self.destination_dir, &taken_at, path)?;

        // 解析 EXIF 已讀過檔案，需回到開頭再複製
        file.seek(SeekFrom::Start(0))
            .with_context(|| format!("failed to rewind file {}", path.display()))?;
        copy_guarded(self.fs, &mut file, &destination)
            .with_context(|| format!("failed to copy image {}", path.display()))?;

        Ok(destination)
    }
}
