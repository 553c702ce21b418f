use serde::Deserialize;
use std::path::Path;

/// 可處理的影像副檔名表（含前導的 `.`）
#[derive(Debug, Clone, Deserialize)]
pub struct ImageTypeTable {
    #[serde(rename = "IMAGE_FILE")]
    pub image_file: Vec<String>,
}

impl ImageTypeTable {
    /// 副檔名（不分大小寫）在允許清單內才算影像檔
    #[must_use]
    pub fn is_image_file(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            return false;
        };
        let ext = format!(".{}", ext.to_lowercase());
        self.image_file
            .iter()
            .any(|allowed| allowed.to_lowercase() == ext)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub image_type_table: ImageTypeTable,
}
