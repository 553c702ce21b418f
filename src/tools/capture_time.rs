use anyhow::{Result, anyhow, bail};
use chrono::{NaiveDate, NaiveDateTime};
use exif::{Exif, In, Reader, Tag, Value};
use std::io::{BufRead, Seek};

/// 依序嘗試的拍攝時間欄位
const CAPTURE_TAGS: [Tag; 2] = [Tag::DateTimeOriginal, Tag::DateTime];

/// 從影像容器（JPEG/TIFF 等）解析 EXIF 區塊
pub fn decode_metadata<R: BufRead + Seek>(reader: &mut R) -> Result<Exif> {
    Reader::new()
        .read_from_container(reader)
        .map_err(|err| anyhow!("{err}"))
}

/// 取得拍攝時間，先找 `DateTimeOriginal`，再退回主影像的 `DateTime`
pub fn capture_time(exif: &Exif) -> Result<NaiveDateTime> {
    let field = CAPTURE_TAGS
        .iter()
        .find_map(|tag| exif.get_field(*tag, In::PRIMARY))
        .ok_or_else(|| anyhow!("no capture date-time field in EXIF data"))?;

    let Value::Ascii(ref values) = field.value else {
        bail!("{} is not an ASCII value", field.tag);
    };
    let raw = values
        .first()
        .ok_or_else(|| anyhow!("{} is empty", field.tag))?;

    let dt = exif::DateTime::from_ascii(raw)
        .map_err(|err| anyhow!("malformed {}: {err}", field.tag))?;

    NaiveDate::from_ymd_opt(
        i32::from(dt.year),
        u32::from(dt.month),
        u32::from(dt.day),
    )
    .and_then(|date| {
        date.and_hms_opt(
            u32::from(dt.hour),
            u32::from(dt.minute),
            u32::from(dt.second),
        )
    })
    .ok_or_else(|| {
        anyhow!(
            "{} is not a valid calendar date-time: {}",
            field.tag,
            String::from_utf8_lossy(raw)
        )
    })
}
