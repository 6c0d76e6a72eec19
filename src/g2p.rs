//! 英単語→音素列の辞書引き
//!
//! 綴り→音素変換は外部コラボレータの責務であり、ここではその境界を
//! トレイトとして定義する。同梱の実装は CMUdict 形式の発音辞書を
//! 起動時に一度読み込むだけの単純なもの。

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// 綴り→音素変換の境界
///
/// 返り値は空白区切りの音素コード列（例: `"K AE1 T"`）。
/// 辞書に無い語は `None` を返し、呼び出し側のフォールバックに委ねる。
pub trait GraphemeToPhoneme {
    fn phonemes(&self, word: &str) -> Option<&str>;
}

/// CMUdict 形式の発音辞書
///
/// 1 行 1 語の `WORD  K AE1 T` 形式。`;;;` で始まるコメント行と
/// `WORD(1)` 形式の異読エントリは読み飛ばす。語の照合は大文字小文字を無視する。
pub struct PronouncingDict {
    dict: HashMap<String, String>,
}

impl PronouncingDict {
    /// 空の辞書（すべての語が未登録扱いになる）
    pub fn empty() -> Self {
        Self {
            dict: HashMap::new(),
        }
    }

    /// 辞書本文から構築する
    pub fn from_str_content(content: &str) -> Self {
        let mut dict = HashMap::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }
            let Some((word, phonemes)) = line.split_once(char::is_whitespace) else {
                continue;
            };
            // 異読エントリ（WORD(1) など）は第一候補だけ残す
            if word.ends_with(')') {
                continue;
            }
            dict.insert(word.to_lowercase(), phonemes.trim().to_string());
        }
        Self { dict }
    }

    /// 辞書ファイルを読み込む
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("発音辞書を読み込めない: {}", path.display()))?;
        let dict = Self::from_str_content(&content);
        tracing::debug!("発音辞書を読み込み: {} 語 ({})", dict.len(), path.display());
        Ok(dict)
    }

    pub fn len(&self) -> usize {
        self.dict.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dict.is_empty()
    }
}

impl GraphemeToPhoneme for PronouncingDict {
    fn phonemes(&self, word: &str) -> Option<&str> {
        self.dict.get(&word.to_lowercase()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
;;; コメント行
CAT  K AE1 T
CAT(1)  K AE2 T
HELLO  HH AH0 L OW1
";

    #[test]
    fn test_load_and_lookup() {
        let dict = PronouncingDict::from_str_content(SAMPLE);
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.phonemes("cat"), Some("K AE1 T"));
        assert_eq!(dict.phonemes("CAT"), Some("K AE1 T"));
        assert_eq!(dict.phonemes("Hello"), Some("HH AH0 L OW1"));
        assert_eq!(dict.phonemes("dog"), None);
    }

    #[test]
    fn test_variant_entries_skipped() {
        let dict = PronouncingDict::from_str_content(SAMPLE);
        // 異読エントリではなく第一候補が残る
        assert_eq!(dict.phonemes("cat"), Some("K AE1 T"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let dict = PronouncingDict::from_path(file.path()).unwrap();
        assert_eq!(dict.phonemes("hello"), Some("HH AH0 L OW1"));
    }

    #[test]
    fn test_empty_dict() {
        let dict = PronouncingDict::empty();
        assert!(dict.is_empty());
        assert_eq!(dict.phonemes("cat"), None);
    }

    #[test]
    fn test_tab_separated_lines() {
        let dict = PronouncingDict::from_str_content("WORLD\tW ER1 L D");
        assert_eq!(dict.phonemes("world"), Some("W ER1 L D"));
    }
}
