//! # Properties Source Module / Properties 配置源模块
//!
//! A minimal reader for the `.properties` key-value text format the
//! configuration is sourced from: one `key=value` (or `key: value`) pair per
//! line, `#` and `!` comment lines, UTF-8.
//!
//! 配置来源的 `.properties` 键值文本格式的最小读取器：
//! 每行一个 `key=value`（或 `key: value`）对，`#` 和 `!` 注释行，UTF-8。

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// A loaded set of properties.
/// 加载的属性集合。
#[derive(Debug, Clone, Default)]
pub struct Properties {
    entries: HashMap<String, String>,
}

impl Properties {
    /// Loads a properties file from disk.
    ///
    /// A missing or unreadable file is fatal ([`Error::ConfigLoad`]): there
    /// is no silent continuation with empty values, which would otherwise
    /// report with empty credentials.
    ///
    /// 从磁盘加载 properties 文件。
    /// 文件缺失或不可读是致命的（[`Error::ConfigLoad`]）：
    /// 不会携带空值静默继续，否则会用空凭据进行报告。
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigLoad {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// Parses properties from text. Later occurrences of a key win.
    /// 从文本解析属性。同一键后出现的值生效。
    pub fn parse(text: &str) -> Self {
        let mut entries = HashMap::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            if let Some(idx) = line.find(['=', ':']) {
                let key = line[..idx].trim();
                let value = line[idx + 1..].trim();
                if !key.is_empty() {
                    entries.insert(key.to_string(), value.to_string());
                }
            }
        }
        Self { entries }
    }

    /// The raw value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// The value for a key, or the given default when the key is missing.
    /// 键对应的值，键缺失时返回给定默认值。
    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }
}
