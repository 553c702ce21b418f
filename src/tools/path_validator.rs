use crate::tools::FileSystem;
use anyhow::{Context, Result, bail};
use std::io;
use std::path::Path;

pub const FLAGS_NOT_SET: &str = "both of the flags need to be set: src and dst";

/// 檢查命令列傳入的資料夾參數：必須有值、存在且為資料夾
pub fn check_dir_flag(fs: &dyn FileSystem, dir: &str) -> Result<()> {
    if dir.is_empty() {
        bail!(FLAGS_NOT_SET);
    }

    match fs.metadata(Path::new(dir)) {
        Ok(metadata) if metadata.is_dir => Ok(()),
        Ok(_) => bail!("Not a dir: {dir}"),
        Err(err) if err.kind() == io::ErrorKind::NotFound => bail!("Dir does not exist: {dir}"),
        Err(err) => Err(err).with_context(|| format!("failed to stat dir: {dir}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{MemFs, OsFs};
    use tempfile::TempDir;

    #[test]
    fn test_flag_not_set() {
        let err = check_dir_flag(&MemFs::new(), "").unwrap_err();
        assert_eq!(err.to_string(), FLAGS_NOT_SET);
    }

    #[test]
    fn test_dir_does_not_exist() {
        let err = check_dir_flag(&MemFs::new(), "/test").unwrap_err();
        assert_eq!(err.to_string(), "Dir does not exist: /test");
    }

    #[test]
    fn test_not_a_dir() {
        let fs = MemFs::new();
        fs.add_file("/file", "file c");

        let err = check_dir_flag(&fs, "/file").unwrap_err();
        assert_eq!(err.to_string(), "Not a dir: /file");
    }

    #[test]
    fn test_existing_dir() {
        let fs = MemFs::new();
        fs.add_dir("/testDir");
        assert!(check_dir_flag(&fs, "/testDir").is_ok());
    }

    #[test]
    fn test_existing_dir_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().to_string_lossy().into_owned();
        assert!(check_dir_flag(&OsFs::new(), &dir).is_ok());

        let missing = temp_dir.path().join("missing").to_string_lossy().into_owned();
        let err = check_dir_flag(&OsFs::new(), &missing).unwrap_err();
        assert_eq!(err.to_string(), format!("Dir does not exist: {missing}"));
    }
}
