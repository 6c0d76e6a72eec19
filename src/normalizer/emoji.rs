//! 絵文字→読み上げ名の辞書
//!
//! 絵文字グリフをキーにした外部データセット（JSON）を起動時に一度だけ
//! 読み込む。照合はグリフの完全一致。未登録の絵文字はそのまま通す。

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// データセット 1 エントリ分（short_name 以外のフィールドは読み捨てる）
#[derive(Debug, Deserialize)]
struct EmojiEntry {
    short_name: String,
}

/// 絵文字読み辞書
pub struct EmojiDict {
    map: HashMap<String, String>,
}

impl EmojiDict {
    /// 空の辞書（すべての絵文字が素通しになる）
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// JSON 本文から構築する
    ///
    /// 形式: `{"😀": {"short_name": "にやけ顔", ...}, ...}`
    pub fn from_json_str(content: &str) -> Result<Self> {
        let raw: HashMap<String, EmojiEntry> =
            serde_json::from_str(content).context("絵文字データセットの形式が不正")?;
        Ok(Self {
            map: raw
                .into_iter()
                .map(|(glyph, entry)| (glyph, entry.short_name))
                .collect(),
        })
    }

    /// データセットファイルを読み込む
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("絵文字データセットを読み込めない: {}", path.display()))?;
        let dict = Self::from_json_str(&content)?;
        tracing::debug!(
            "絵文字データセットを読み込み: {} 件 ({})",
            dict.len(),
            path.display()
        );
        Ok(dict)
    }

    /// グリフの読みを引く
    pub fn try_map(&self, glyph: &str) -> Option<&str> {
        self.map.get(glyph).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for EmojiDict {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "😀": {"short_name": "にやけ顔", "group": "Smileys & Emotion"},
        "🍣": {"short_name": "寿司"}
    }"#;

    #[test]
    fn test_lookup() {
        let dict = EmojiDict::from_json_str(SAMPLE).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.try_map("😀"), Some("にやけ顔"));
        assert_eq!(dict.try_map("🍣"), Some("寿司"));
        // 未登録は None（呼び出し側で素通しにする）
        assert_eq!(dict.try_map("🦑"), None);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let dict = EmojiDict::from_path(file.path()).unwrap();
        assert_eq!(dict.try_map("🍣"), Some("寿司"));
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(EmojiDict::from_json_str("not json").is_err());
    }

    #[test]
    fn test_empty_dict() {
        let dict = EmojiDict::empty();
        assert!(dict.is_empty());
        assert_eq!(dict.try_map("😀"), None);
    }
}
