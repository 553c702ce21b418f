use clap::Parser;

/// 將含 EXIF 拍攝時間的 JPEG 複製到 `dst/YYYY/YYYY-MM-DD--HH-MM-SS-原檔名`
#[derive(Debug, Parser)]
#[command(name = "photo_organize", version, about)]
pub struct Cli {
    /// path to the source dir with images
    #[arg(long, default_value_t = String::new())]
    pub src: String,

    /// path to the destination dir
    #[arg(long, default_value_t = String::new())]
    pub dst: String,
}
