//! エンジン設定
//!
//! データセットのパスだけを持つ小さな設定。設定ファイルが無ければ
//! 既定値で動き、データセット未指定でもエンジンは縮退動作する。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::g2p::PronouncingDict;
use crate::normalizer::{EmojiDict, NormalizerEngine};

/// エンジン設定
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// 絵文字データセット（JSON）のパス
    pub emoji_dataset: Option<PathBuf>,
    /// 発音辞書（CMUdict 形式）のパス
    pub pronouncing_dict: Option<PathBuf>,
}

impl EngineConfig {
    /// 既定の設定ファイルパス（<config_dir>/yomiage/config.json）
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("yomiage").join("config.json"))
    }

    /// 設定を読み込む。設定ファイルが無ければ既定値を返す。
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// 指定パスから設定を読み込む
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("設定ファイルを読み込めない: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("設定ファイルの形式が不正: {}", path.display()))
    }

    /// 設定に従って整形エンジンを組み立てる
    pub fn build_engine(&self) -> Result<NormalizerEngine> {
        let emoji = match &self.emoji_dataset {
            Some(path) => EmojiDict::from_path(path)?,
            None => EmojiDict::empty(),
        };
        let dict = match &self.pronouncing_dict {
            Some(path) => PronouncingDict::from_path(path)?,
            None => PronouncingDict::empty(),
        };
        Ok(NormalizerEngine::new(emoji, dict))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"emoji_dataset": "/tmp/emoji.json"}"#)
            .unwrap();

        let config = EngineConfig::load_from(file.path()).unwrap();
        assert_eq!(
            config.emoji_dataset,
            Some(PathBuf::from("/tmp/emoji.json"))
        );
        // 未指定フィールドは既定値
        assert_eq!(config.pronouncing_dict, None);
    }

    #[test]
    fn test_default_builds_degraded_engine() {
        let config = EngineConfig::default();
        // データセットなしでもエンジンは組み立てられる
        assert!(config.build_engine().is_ok());
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(EngineConfig::load_from("/nonexistent/config.json").is_err());
    }
}
