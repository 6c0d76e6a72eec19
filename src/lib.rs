//! yomiage - チャットメッセージの読み上げテキスト整形エンジン
//!
//! チャットメッセージ（または入退室アナウンスなどの合成文）を受け取り、
//! 音声合成 API に渡せる 1 本の文字列へ変換する。処理は 2 段構成:
//!
//! 1. [`NormalizerEngine`] — マークアップ（メンション・絵文字・URL・伏せ字）を
//!    話し言葉に置き換え、文字種判定で転写経路を振り分ける
//! 2. [`KanaEngine`] — 発音辞書が返す音素列を文脈依存ルールでカタカナ化する
//!
//! どちらも同期・純粋な変換で、共有可変状態を持たない。静的テーブルと
//! 起動時に読み込むデータセット以外に外部リソースは使わない。

mod announce;
mod config;
mod g2p;
mod kana;
mod message;
mod normalizer;

pub use announce::{member_joined, member_left};
pub use config::EngineConfig;
pub use g2p::{GraphemeToPhoneme, PronouncingDict};
pub use kana::{parse_sequence, ConsonantPhone, KanaEngine, PhonemeToken, VowelPhone};
pub use message::{RawMessage, RoleMention, UserMention};
pub use normalizer::{EmojiDict, NormalizerEngine, Route};
