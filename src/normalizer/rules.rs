//! マークアップ書き換えルール
//!
//! 名前付きルールを適用順に並べた表。順序は表の並びだけで決まり、
//! より特殊な URL パターンほど先に置く。表は起動時に一度だけ
//! コンパイルされ、以後は読み取り専用。

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// 書き換えルール（名前・パターン・置換器）
pub struct RewriteRule {
    pub name: &'static str,
    pattern: Regex,
    replacer: Box<dyn Fn(&Captures) -> String + Send + Sync>,
}

impl RewriteRule {
    fn new(
        name: &'static str,
        pattern: &str,
        replacer: Box<dyn Fn(&Captures) -> String + Send + Sync>,
    ) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).unwrap(),
            replacer,
        }
    }

    /// ルールを全出現箇所に適用する
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures| (self.replacer)(caps))
            .into_owned()
    }
}

lazy_static! {
    /// 合字セレクタ・肌色修飾子の除去（絵文字辞書引きの前に適用する）
    pub static ref STRIP_RULES: Vec<RewriteRule> = vec![
        RewriteRule::new(
            "variation-selector",
            "[\u{FE00}-\u{FE0F}]",
            Box::new(|_| String::new()),
        ),
        RewriteRule::new(
            "skin-tone-modifier",
            "[\u{1F3FB}-\u{1F3FF}]",
            Box::new(|_| String::new()),
        ),
    ];

    /// マークアップ置換ルール（適用順）
    pub static ref MARKUP_RULES: Vec<RewriteRule> = vec![
        // カスタム絵文字は名前部分を読み上げる（下線は空白に）
        RewriteRule::new(
            "custom-emoji",
            r"<:([A-Za-z0-9_]+):\d+>",
            Box::new(|caps: &Captures| format!("、{}、", caps[1].replace('_', " "))),
        ),
        // プレビュー URL。汎用 URL ルールより先に置かないと飲み込まれる
        RewriteRule::new(
            "url-preview",
            r"https://tenor\.com/view/[-\w/:%#$&?()~.=+]+",
            Box::new(|_| "画像".to_string()),
        ),
        RewriteRule::new(
            "url-image",
            r"https?://[-\w/:%#$&?()~.=+]+\.(?:jpg|jpeg|gif|png|bmp)",
            Box::new(|_| "、画像".to_string()),
        ),
        RewriteRule::new(
            "url-generic",
            r"https?://[-\w/:%#$&?()~.=+]+",
            Box::new(|_| "、ユーアールエル".to_string()),
        ),
        // 伏せ字スパンは中身ごと置き換える
        RewriteRule::new(
            "spoiler",
            r"\|\|.+?\|\|",
            Box::new(|_| "伏せ字".to_string()),
        ),
    ];
}

/// マークアップルール名を適用順で返す
#[allow(dead_code)]
pub fn markup_rule_names() -> Vec<&'static str> {
    MARKUP_RULES.iter().map(|r| r.name).collect()
}

/// 画像として読み上げる添付ファイル拡張子
const IMAGE_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".gif", ".png", ".bmp"];

/// 画像拡張子のファイル名か
pub fn is_image_filename(name: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// 末尾の笑い表現（w の連続）を「、ワラ」にまとめる
///
/// 半角・全角の w/W をすべて剥がし、1 個以上あった場合だけ付け直す。
/// 自身の出力には再適用されない（出力は w で終わらない）。
pub fn collapse_laughing(text: &str) -> String {
    const LAUGH: [char; 4] = ['w', 'W', 'ｗ', 'Ｗ'];
    let trimmed = text.trim_end_matches(|c| LAUGH.contains(&c));
    if trimmed.len() == text.len() {
        return text.to_string();
    }
    format!("{}、ワラ", trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_markup(text: &str) -> String {
        let mut text = text.to_string();
        for rule in MARKUP_RULES.iter() {
            text = rule.apply(&text);
        }
        text
    }

    /// 特殊な URL ルールが汎用ルールより先に並んでいること
    #[test]
    fn test_rule_order() {
        assert_eq!(
            markup_rule_names(),
            vec![
                "custom-emoji",
                "url-preview",
                "url-image",
                "url-generic",
                "spoiler"
            ]
        );
    }

    #[test]
    fn test_custom_emoji() {
        assert_eq!(
            apply_markup("<:squid_dance:12345>"),
            "、squid dance、"
        );
    }

    #[test]
    fn test_preview_url_beats_generic() {
        assert_eq!(
            apply_markup("https://tenor.com/view/funny-cat-12345"),
            "画像"
        );
    }

    #[test]
    fn test_image_url_beats_generic() {
        assert_eq!(
            apply_markup("見て https://example.com/photo.png"),
            "見て 、画像"
        );
    }

    #[test]
    fn test_generic_url() {
        assert_eq!(
            apply_markup("hello https://example.com/page"),
            "hello 、ユーアールエル"
        );
    }

    #[test]
    fn test_spoiler() {
        assert_eq!(apply_markup("結末は||犯人はヤス||です"), "結末は伏せ字です");
    }

    #[test]
    fn test_collapse_laughing_any_run_length() {
        assert_eq!(collapse_laughing("それなw"), "それな、ワラ");
        assert_eq!(collapse_laughing("それなwwwww"), "それな、ワラ");
        // 全角混じりでもまとめて剥がす
        assert_eq!(collapse_laughing("それなｗｗW"), "それな、ワラ");
        // 末尾以外の w には触れない
        assert_eq!(collapse_laughing("wow"), "wo、ワラ");
        assert_eq!(collapse_laughing("笑わない"), "笑わない");
    }

    #[test]
    fn test_collapse_laughing_not_retriggered() {
        let once = collapse_laughing("うけるwww");
        assert_eq!(collapse_laughing(&once), once);
    }

    #[test]
    fn test_image_filename() {
        assert!(is_image_filename("photo.png"));
        assert!(is_image_filename("anim.gif"));
        assert!(!is_image_filename("notes.txt"));
        assert!(!is_image_filename("archive.zip"));
    }
}
