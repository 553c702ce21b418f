use crate::config::types::{Config, ImageTypeTable};
use anyhow::{Context, Result};

/// 編譯時嵌入的影像類型設定（不需要外部檔案）
const IMAGE_TYPE_TABLE_JSON: &str = include_str!("../data/image_type_table.json");

impl Config {
    pub fn new() -> Result<Self> {
        Ok(Self {
            image_type_table: Self::load_embedded_image_type_table()?,
        })
    }

    fn load_embedded_image_type_table() -> Result<ImageTypeTable> {
        serde_json::from_str(IMAGE_TYPE_TABLE_JSON)
            .context("failed to parse embedded image type table")
    }
}
