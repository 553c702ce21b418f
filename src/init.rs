//! 日誌初始化
//!
//! 每筆紀錄輸出為一行 JSON，附帶 `log` 的 key-value 欄位。

use chrono::Local;
use env_logger::{Builder, Env};
use log::Record;
use log::kv::{Error as KvError, Key, Source, Value as KvValue, VisitSource};
use serde_json::{Map, Value};
use std::io::Write;

struct FieldCollector<'a>(&'a mut Map<String, Value>);

impl<'kvs> VisitSource<'kvs> for FieldCollector<'_> {
    fn visit_pair(&mut self, key: Key<'kvs>, value: KvValue<'kvs>) -> Result<(), KvError> {
        let field = if let Some(n) = value.to_u64() {
            Value::from(n)
        } else if let Some(n) = value.to_i64() {
            Value::from(n)
        } else if let Some(b) = value.to_bool() {
            Value::Bool(b)
        } else {
            Value::String(value.to_string())
        };
        self.0.insert(key.as_str().to_string(), field);
        Ok(())
    }
}

/// 將一筆紀錄格式化為 JSON 物件（不含換行）
#[must_use]
pub fn format_record(record: &Record<'_>) -> String {
    let mut fields = Map::new();
    fields.insert("time".to_string(), Value::String(Local::now().to_rfc3339()));
    fields.insert(
        "level".to_string(),
        Value::String(record.level().as_str().to_lowercase()),
    );
    fields.insert("msg".to_string(), Value::String(record.args().to_string()));

    // 欄位收集失敗時仍輸出訊息本身
    let _ = record.key_values().visit(&mut FieldCollector(&mut fields));

    Value::Object(fields).to_string()
}

pub fn init() {
    let result = Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", format_record(record)))
        .try_init();

    if let Err(e) = result {
        eprintln!("failed to initialise logger: {e}");
    }
}
