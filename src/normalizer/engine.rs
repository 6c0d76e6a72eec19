//! 読み上げテキスト整形エンジン
//!
//! 順序付きの書き換えパスでマークアップを話し言葉に置き換え、
//! 文字種判定で転写経路を振り分ける。後段のパスが前段の出力を
//! 再マッチしないよう、並び順に意味がある。

use unicode_normalization::UnicodeNormalization;

use crate::g2p::{GraphemeToPhoneme, PronouncingDict};
use crate::kana::KanaEngine;
use crate::message::RawMessage;
use crate::normalizer::alphabet::alphabet_to_kana;
use crate::normalizer::emoji::EmojiDict;
use crate::normalizer::lang::{detect_route, Route};
use crate::normalizer::romanize::{cyrillic_to_latin, han_to_pinyin, hangul_to_latin};
use crate::normalizer::rules::{collapse_laughing, is_image_filename, MARKUP_RULES, STRIP_RULES};

/// 整形エンジン（読み込み済みデータセットを保持し、再利用できる）
pub struct NormalizerEngine {
    emoji: EmojiDict,
    g2p: Box<dyn GraphemeToPhoneme + Send + Sync>,
    kana: KanaEngine,
}

impl NormalizerEngine {
    /// データセットを指定してエンジンを組み立てる
    pub fn new(emoji: EmojiDict, g2p: impl GraphemeToPhoneme + Send + Sync + 'static) -> Self {
        Self {
            emoji,
            g2p: Box::new(g2p),
            kana: KanaEngine::new(),
        }
    }

    /// データセットなしのエンジン（絵文字・英単語の置換が縮退する）
    pub fn without_datasets() -> Self {
        Self::new(EmojiDict::empty(), PronouncingDict::empty())
    }

    /// メッセージを読み上げ用テキストへ整形する
    ///
    /// `attribute` は発言者名を先頭に付けるかどうか。同一発言者の連続
    /// 投稿かどうかの判断は呼び出し側のセッション管理が行い、ここでは
    /// 真偽値として受け取るだけ。
    pub fn normalize(&self, raw: &RawMessage, attribute: bool) -> String {
        // 1. Unicode 正規化 (NFC) と改行の置換
        let mut text: String = raw.content.nfc().collect();
        text = text.replace('\n', "、");

        // 2. 発言者名の前置
        if attribute {
            if let Some(name) = &raw.author_name {
                text = format!("{}、{}", name, text);
            }
        }

        // 3. メンションの読み下し（ロール名は敬称なし）
        for m in &raw.user_mentions {
            text = text.replace(
                &format!("<@{}>", m.id),
                &format!("、{}さんへのメンション", m.display_name),
            );
        }
        for m in &raw.role_mentions {
            text = text.replace(&m.tag, &format!("、{}へのメンション", m.name));
        }

        // 4. 合字セレクタ・肌色修飾子の除去
        for rule in STRIP_RULES.iter() {
            text = rule.apply(&text);
        }

        // 5. Unicode 絵文字の読み下し（未登録は素通し）
        text = self.replace_emoji(&text);

        // 6〜8. カスタム絵文字・URL・伏せ字
        for rule in MARKUP_RULES.iter() {
            text = rule.apply(&text);
        }

        // 9. 末尾の笑い表現
        text = collapse_laughing(&text);

        // 10. 添付ファイルの読み足し
        for filename in &raw.attachments {
            if is_image_filename(filename) {
                text.push_str("、画像");
            } else {
                text.push_str("、添付ファイル");
            }
        }

        // 11. 言語判定と転写（空になっていたら何もしない）
        if !text.is_empty() {
            let route = detect_route(&text);
            tracing::debug!("転写経路: {:?}", route);
            text = match route {
                Route::Chinese => han_to_pinyin(&text),
                Route::Korean => hangul_to_latin(&text),
                Route::Latin => {
                    let latin = cyrillic_to_latin(&text);
                    let converted = self.english_to_kana(&latin);
                    alphabet_to_kana(&converted)
                }
            };
            // 12. 前段までで混入したラテン文字の一括かな化
            text = alphabet_to_kana(&text);
        }

        // 合成リクエストに埋め込めるよう制御文字を落とす
        text.retain(|c| !c.is_control());
        text
    }

    /// 英単語を発音辞書で引いてカナ化する。辞書に無い語はそのまま残す。
    fn english_to_kana(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut word = String::new();
        for ch in text.chars() {
            if ch.is_ascii_alphabetic() {
                word.push(ch);
            } else {
                self.flush_word(&mut word, &mut out);
                out.push(ch);
            }
        }
        self.flush_word(&mut word, &mut out);
        out
    }

    fn flush_word(&self, word: &mut String, out: &mut String) {
        if word.is_empty() {
            return;
        }
        match self.g2p.phonemes(word) {
            Some(phonemes) => out.push_str(&self.kana.transliterate_str(phonemes)),
            None => out.push_str(word),
        }
        word.clear();
    }

    fn replace_emoji(&self, text: &str) -> String {
        if self.emoji.is_empty() {
            return text.to_string();
        }
        let mut out = String::with_capacity(text.len());
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            match self.emoji.try_map(ch.encode_utf8(&mut buf)) {
                Some(name) => out.push_str(name),
                None => out.push(ch),
            }
        }
        out
    }
}

impl Default for NormalizerEngine {
    fn default() -> Self {
        Self::without_datasets()
    }
}
