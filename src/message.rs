//! メッセージ入力の型定義

use serde::{Deserialize, Serialize};

/// ユーザーメンション（ID と表示名の対）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserMention {
    pub id: u64,
    pub display_name: String,
}

/// ロールメンション
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleMention {
    /// メッセージ中に現れる生タグ（例: `<@&123>`）
    pub tag: String,
    pub name: String,
}

/// 整形エンジンへの入力メッセージ
///
/// チャットプラットフォームのイベント層が組み立てて渡す。
/// 一度の変換で消費され、エンジン側に残らない。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMessage {
    /// 本文
    pub content: String,
    /// ユーザーメンション（出現順）
    pub user_mentions: Vec<UserMention>,
    /// ロールメンション（出現順）
    pub role_mentions: Vec<RoleMention>,
    /// 添付ファイル名（出現順）
    pub attachments: Vec<String>,
    /// 発言者の表示名
    pub author_name: Option<String>,
}

impl RawMessage {
    /// 本文だけのメッセージを作る
    pub fn from_text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            user_mentions: Vec::new(),
            role_mentions: Vec::new(),
            attachments: Vec::new(),
            author_name: None,
        }
    }
}
