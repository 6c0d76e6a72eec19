//! 読み上げテキスト整形
//!
//! チャットメッセージのマークアップを話し言葉に置き換え、読み上げ API に
//! 渡せる 1 本の文字列へ整形する。
//!
//! ## 処理フロー
//! 1. Unicode 正規化 + 改行の置換
//! 2. 発言者名・メンションの読み下し
//! 3. 絵文字の読み下し（合字セレクタ除去 → 辞書引き）
//! 4. カスタム絵文字・URL・伏せ字の置換（順序付きルール表）
//! 5. 笑い表現の畳み込みと添付ファイルの読み足し
//! 6. 文字種判定 → ピンイン / ローマ字 / 発音辞書経由のカナ化

mod alphabet;
mod emoji;
mod engine;
mod lang;
mod romanize;
mod rules;

pub use emoji::EmojiDict;
pub use engine::NormalizerEngine;
pub use lang::Route;
