use anyhow::{Result, anyhow};
use chrono::NaiveDateTime;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// 依拍攝時間計算目標路徑：`dst/YYYY/YYYY-MM-DD--HH-MM-SS-原檔名`
pub fn destination_path(
    destination_dir: &Path,
    taken_at: &NaiveDateTime,
    source: &Path,
) -> Result<PathBuf> {
    let file_name = source
        .file_name()
        .ok_or_else(|| anyhow!("source path has no file name: {}", source.display()))?;

    let mut name = OsString::from(taken_at.format("%Y-%m-%d--%H-%M-%S-").to_string());
    name.push(file_name);

    Ok(destination_dir
        .join(taken_at.format("%Y").to_string())
        .join(name))
}
