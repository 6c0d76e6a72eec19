//! ラテン文字→かなの音節マッパー
//!
//! 辞書引きで拾えなかったローマ字綴りの残りを最長一致でかなに落とす。
//! どの音節にも一致しない文字はそのまま通す（fail-open）。

use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    /// ローマ字音節表（キーは小文字）
    static ref SYLLABLES: HashMap<&'static str, &'static str> = HashMap::from([
        ("a", "あ"), ("i", "い"), ("u", "う"), ("e", "え"), ("o", "お"),
        ("ka", "か"), ("ki", "き"), ("ku", "く"), ("ke", "け"), ("ko", "こ"),
        ("ga", "が"), ("gi", "ぎ"), ("gu", "ぐ"), ("ge", "げ"), ("go", "ご"),
        ("sa", "さ"), ("si", "し"), ("su", "す"), ("se", "せ"), ("so", "そ"),
        ("za", "ざ"), ("zi", "じ"), ("zu", "ず"), ("ze", "ぜ"), ("zo", "ぞ"),
        ("ta", "た"), ("ti", "ち"), ("tu", "つ"), ("te", "て"), ("to", "と"),
        ("da", "だ"), ("di", "ぢ"), ("du", "づ"), ("de", "で"), ("do", "ど"),
        ("na", "な"), ("ni", "に"), ("nu", "ぬ"), ("ne", "ね"), ("no", "の"),
        ("ha", "は"), ("hi", "ひ"), ("hu", "ふ"), ("he", "へ"), ("ho", "ほ"),
        ("ba", "ば"), ("bi", "び"), ("bu", "ぶ"), ("be", "べ"), ("bo", "ぼ"),
        ("pa", "ぱ"), ("pi", "ぴ"), ("pu", "ぷ"), ("pe", "ぺ"), ("po", "ぽ"),
        ("ma", "ま"), ("mi", "み"), ("mu", "む"), ("me", "め"), ("mo", "も"),
        ("ya", "や"), ("yu", "ゆ"), ("yo", "よ"),
        ("ra", "ら"), ("ri", "り"), ("ru", "る"), ("re", "れ"), ("ro", "ろ"),
        ("la", "ら"), ("li", "り"), ("lu", "る"), ("le", "れ"), ("lo", "ろ"),
        ("wa", "わ"), ("wi", "うぃ"), ("we", "うぇ"), ("wo", "を"),
        ("fa", "ふぁ"), ("fi", "ふぃ"), ("fu", "ふ"), ("fe", "ふぇ"), ("fo", "ふぉ"),
        ("va", "ゔぁ"), ("vi", "ゔぃ"), ("vu", "ゔ"), ("ve", "ゔぇ"), ("vo", "ゔぉ"),
        ("ja", "じゃ"), ("ji", "じ"), ("ju", "じゅ"), ("je", "じぇ"), ("jo", "じょ"),
        ("kya", "きゃ"), ("kyu", "きゅ"), ("kyo", "きょ"),
        ("gya", "ぎゃ"), ("gyu", "ぎゅ"), ("gyo", "ぎょ"),
        ("sha", "しゃ"), ("shi", "し"), ("shu", "しゅ"), ("she", "しぇ"), ("sho", "しょ"),
        ("sya", "しゃ"), ("syu", "しゅ"), ("syo", "しょ"),
        ("cha", "ちゃ"), ("chi", "ち"), ("chu", "ちゅ"), ("che", "ちぇ"), ("cho", "ちょ"),
        ("tya", "ちゃ"), ("tyu", "ちゅ"), ("tyo", "ちょ"),
        ("zya", "じゃ"), ("zyu", "じゅ"), ("zyo", "じょ"),
        ("nya", "にゃ"), ("nyu", "にゅ"), ("nyo", "にょ"),
        ("hya", "ひゃ"), ("hyu", "ひゅ"), ("hyo", "ひょ"),
        ("bya", "びゃ"), ("byu", "びゅ"), ("byo", "びょ"),
        ("pya", "ぴゃ"), ("pyu", "ぴゅ"), ("pyo", "ぴょ"),
        ("mya", "みゃ"), ("myu", "みゅ"), ("myo", "みょ"),
        ("rya", "りゃ"), ("ryu", "りゅ"), ("ryo", "りょ"),
        ("tsu", "つ"),
    ]);
}

fn is_romaji_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// ローマ字綴りをかなへ変換する
///
/// 大文字小文字は区別せず、促音（子音の重なり）と撥音（母音・y が続かない n）を
/// 扱う。音節にならない文字は変換せず残す。
pub fn alphabet_to_kana(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if !c.is_ascii_alphabetic() {
            out.push(c);
            i += 1;
            continue;
        }
        let lc = c.to_ascii_lowercase();

        // 促音: 同じ子音の重なり（n は撥音として別扱い）
        if lc != 'n' && !is_romaji_vowel(lc) && i + 1 < chars.len() {
            let next = chars[i + 1].to_ascii_lowercase();
            if next == lc {
                out.push('っ');
                i += 1;
                continue;
            }
        }

        // 撥音: n の後に母音も y も続かない場合
        if lc == 'n' {
            let next = chars.get(i + 1).map(|c| c.to_ascii_lowercase());
            let vowel_or_y = matches!(next, Some(c) if is_romaji_vowel(c) || c == 'y');
            if !vowel_or_y {
                out.push('ん');
                i += 1;
                continue;
            }
        }

        // 最長一致（3 → 2 → 1 文字）
        let mut matched = false;
        for len in (1..=3).rev() {
            if i + len > chars.len() {
                continue;
            }
            if !chars[i..i + len].iter().all(|c| c.is_ascii_alphabetic()) {
                continue;
            }
            let key: String = chars[i..i + len]
                .iter()
                .map(|c| c.to_ascii_lowercase())
                .collect();
            if let Some(kana) = SYLLABLES.get(key.as_str()) {
                out.push_str(kana);
                i += len;
                matched = true;
                break;
            }
        }
        if !matched {
            out.push(c);
            i += 1;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_syllables() {
        assert_eq!(alphabet_to_kana("ka"), "か");
        assert_eq!(alphabet_to_kana("kyo"), "きょ");
        assert_eq!(alphabet_to_kana("sakura"), "さくら");
    }

    #[test]
    fn test_sokuon() {
        assert_eq!(alphabet_to_kana("nippon"), "にっぽん");
        assert_eq!(alphabet_to_kana("kitte"), "きって");
    }

    #[test]
    fn test_coda_n() {
        assert_eq!(alphabet_to_kana("n"), "ん");
        assert_eq!(alphabet_to_kana("kantan"), "かんたん");
        // n の後が n でも最初の n は撥音になる
        assert_eq!(alphabet_to_kana("onna"), "おんな");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(alphabet_to_kana("KA"), "か");
        assert_eq!(alphabet_to_kana("Shi"), "し");
    }

    #[test]
    fn test_unmatched_chars_pass_through() {
        // 音節にならない文字は残る
        assert_eq!(alphabet_to_kana("q1"), "q1");
        assert_eq!(alphabet_to_kana("かな123"), "かな123");
    }

    #[test]
    fn test_idempotent_on_kana() {
        let converted = alphabet_to_kana("konnichiwa");
        assert_eq!(alphabet_to_kana(&converted), converted);
    }
}
