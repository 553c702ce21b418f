use crate::tools::FileSystem;
use anyhow::{Context, Result, bail};
use std::io::Read;
use std::path::Path;

/// 將來源內容複製到 `destination`，目標已存在時不寫入任何東西
pub fn copy_guarded(
    fs: &dyn FileSystem,
    source: &mut dyn Read,
    destination: &Path,
) -> Result<()> {
    if fs.exists(destination) {
        bail!("destination file already exists: {}", destination.display());
    }

    if let Some(parent) = destination.parent() {
        fs.create_dir_all(parent)
            .with_context(|| format!("failed to create dir structure: {}", parent.display()))?;
    }

    let mut content = Vec::new();
    source
        .read_to_end(&mut content)
        .with_context(|| format!("error reading source for {}", destination.display()))?;

    fs.write_new(destination, &content)
        .with_context(|| format!("failed to write to file {}", destination.display()))?;

    Ok(())
}
