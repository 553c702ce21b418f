//! 測試用 JPEG 產生器：只含 SOI、APP1(Exif)、COM 與 EOI

#![allow(dead_code)]

const TAG_ORIENTATION: u16 = 0x0112;
const TAG_DATE_TIME: u16 = 0x0132;
const TAG_EXIF_IFD_POINTER: u16 = 0x8769;
const TAG_DATE_TIME_ORIGINAL: u16 = 0x9003;

const TYPE_ASCII: u16 = 2;
const TYPE_SHORT: u16 = 3;
const TYPE_LONG: u16 = 4;

struct IfdEntry {
    tag: u16,
    kind: u16,
    count: u32,
    data: Vec<u8>,
}

impl IfdEntry {
    fn ascii(tag: u16, text: &str) -> Self {
        let mut data = text.as_bytes().to_vec();
        data.push(0);
        Self {
            tag,
            kind: TYPE_ASCII,
            count: data.len() as u32,
            data,
        }
    }

    fn short(tag: u16, value: u16) -> Self {
        Self {
            tag,
            kind: TYPE_SHORT,
            count: 1,
            data: value.to_be_bytes().to_vec(),
        }
    }

    fn long(tag: u16, value: u32) -> Self {
        Self {
            tag,
            kind: TYPE_LONG,
            count: 1,
            data: value.to_be_bytes().to_vec(),
        }
    }
}

fn ifd_size(entry_count: usize) -> u32 {
    (2 + 12 * entry_count + 4) as u32
}

fn write_ifd(out: &mut Vec<u8>, entries: &[IfdEntry], data: &mut Vec<u8>, data_base: u32) {
    out.extend((entries.len() as u16).to_be_bytes());
    for entry in entries {
        out.extend(entry.tag.to_be_bytes());
        out.extend(entry.kind.to_be_bytes());
        out.extend(entry.count.to_be_bytes());
        if entry.data.len() <= 4 {
            let mut inline = entry.data.clone();
            inline.resize(4, 0);
            out.extend(inline);
        } else {
            out.extend((data_base + data.len() as u32).to_be_bytes());
            data.extend(&entry.data);
            if data.len() % 2 == 1 {
                data.push(0);
            }
        }
    }
    // 沒有下一個 IFD
    out.extend(0u32.to_be_bytes());
}

/// 組出大端序 TIFF 區塊，`exif_ifd` 非空時在 IFD0 加入 Exif IFD 指標
fn tiff(ifd0: Vec<IfdEntry>, exif_ifd: Vec<IfdEntry>) -> Vec<u8> {
    let mut ifd0 = ifd0;
    let exif_offset = 8 + ifd_size(ifd0.len() + usize::from(!exif_ifd.is_empty()));
    if !exif_ifd.is_empty() {
        ifd0.push(IfdEntry::long(TAG_EXIF_IFD_POINTER, exif_offset));
    }
    let exif_size = if exif_ifd.is_empty() {
        0
    } else {
        ifd_size(exif_ifd.len())
    };
    let data_base = exif_offset + exif_size;

    let mut out = b"MM\x00\x2a".to_vec();
    out.extend(8u32.to_be_bytes());
    let mut data = Vec::new();
    write_ifd(&mut out, &ifd0, &mut data, data_base);
    if !exif_ifd.is_empty() {
        write_ifd(&mut out, &exif_ifd, &mut data, data_base);
    }
    out.extend(data);
    out
}

fn jpeg(tiff: Vec<u8>, payload: &str) -> Vec<u8> {
    let mut out = vec![0xFF, 0xD8];

    out.extend([0xFF, 0xE1]);
    out.extend(((2 + 6 + tiff.len()) as u16).to_be_bytes());
    out.extend(b"Exif\x00\x00");
    out.extend(tiff);

    out.extend([0xFF, 0xFE]);
    out.extend(((2 + payload.len()) as u16).to_be_bytes());
    out.extend(payload.as_bytes());

    out.extend([0xFF, 0xD9]);
    out
}

/// `taken_at` 格式為 EXIF 的 `YYYY:MM:DD HH:MM:SS`
pub fn jpeg_taken_at(taken_at: &str, payload: &str) -> Vec<u8> {
    jpeg(
        tiff(
            vec![IfdEntry::short(TAG_ORIENTATION, 1)],
            vec![IfdEntry::ascii(TAG_DATE_TIME_ORIGINAL, taken_at)],
        ),
        payload,
    )
}

/// 只有主影像 `DateTime` 欄位
pub fn jpeg_with_modify_date(date_time: &str, payload: &str) -> Vec<u8> {
    jpeg(
        tiff(vec![IfdEntry::ascii(TAG_DATE_TIME, date_time)], Vec::new()),
        payload,
    )
}

/// 有 EXIF 但沒有任何時間欄位
pub fn jpeg_without_timestamp(payload: &str) -> Vec<u8> {
    jpeg(
        tiff(vec![IfdEntry::short(TAG_ORIENTATION, 1)], Vec::new()),
        payload,
    )
}

/// 沒有 APP1 區塊的 JPEG
pub fn jpeg_without_exif() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xD9]
}
