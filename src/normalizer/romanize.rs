//! 非ラテン文字のローマ字化パス
//!
//! 中国語はピンイン、ハングルは改訂ローマ字、ロシア文字は翻字表で
//! ラテン文字に落とす。対象外の文字はどのパスでもそのまま通す。

use std::collections::HashMap;

use lazy_static::lazy_static;
use pinyin::ToPinyin;

/// 漢字をピンイン（声調なし・区切りなし）へ転写する
pub fn han_to_pinyin(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if let Some(p) = ch.to_pinyin() {
            out.push_str(p.plain());
        } else {
            out.push(ch);
        }
    }
    out
}

// 初声・中声・終声の転写表（改訂ローマ字）
const HANGUL_INITIALS: [&str; 19] = [
    "g", "kk", "n", "d", "tt", "r", "m", "b", "pp", "s", "ss", "", "j", "jj", "ch", "k", "t",
    "p", "h",
];
const HANGUL_MEDIALS: [&str; 21] = [
    "a", "ae", "ya", "yae", "eo", "e", "yeo", "ye", "o", "wa", "wae", "oe", "yo", "u", "wo",
    "we", "wi", "yu", "eu", "ui", "i",
];
// 終声は代表音で転写する（連音・同化などの音変化は適用しない）
const HANGUL_FINALS: [&str; 28] = [
    "", "k", "k", "k", "n", "n", "n", "t", "l", "k", "m", "l", "l", "l", "p", "l", "m", "p",
    "p", "t", "t", "ng", "t", "t", "k", "t", "p", "t",
];

/// ハングルを改訂ローマ字表記へ転写する
///
/// 音節ブロック（U+AC00〜U+D7A3）を初声・中声・終声に分解して引く。
pub fn hangul_to_latin(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        let code = ch as u32;
        if (0xAC00..=0xD7A3).contains(&code) {
            let idx = code - 0xAC00;
            let initial = (idx / 588) as usize;
            let medial = ((idx % 588) / 28) as usize;
            let fin = (idx % 28) as usize;
            out.push_str(HANGUL_INITIALS[initial]);
            out.push_str(HANGUL_MEDIALS[medial]);
            out.push_str(HANGUL_FINALS[fin]);
        } else {
            out.push(ch);
        }
    }
    out
}

lazy_static! {
    /// ロシア文字の翻字表（小文字）
    static ref CYRILLIC: HashMap<char, &'static str> = HashMap::from([
        ('а', "a"), ('б', "b"), ('в', "v"), ('г', "g"), ('д', "d"), ('е', "e"),
        ('ё', "yo"), ('ж', "zh"), ('з', "z"), ('и', "i"), ('й', "j"), ('к', "k"),
        ('л', "l"), ('м', "m"), ('н', "n"), ('о', "o"), ('п', "p"), ('р', "r"),
        ('с', "s"), ('т', "t"), ('у', "u"), ('ф', "f"), ('х', "h"), ('ц', "c"),
        ('ч', "ch"), ('ш', "sh"), ('щ', "shch"), ('ъ', ""), ('ы', "y"), ('ь', ""),
        ('э', "e"), ('ю', "yu"), ('я', "ya"),
    ]);
}

/// ロシア文字をラテン文字へ翻字する
///
/// 大文字は転写結果の先頭だけ大文字にする。表に無い文字はそのまま。
pub fn cyrillic_to_latin(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        let lower = ch.to_lowercase().next().unwrap_or(ch);
        match CYRILLIC.get(&lower) {
            Some(latin) if ch.is_uppercase() => {
                let mut cs = latin.chars();
                if let Some(first) = cs.next() {
                    out.extend(first.to_uppercase());
                    out.push_str(cs.as_str());
                }
            }
            Some(latin) => out.push_str(latin),
            None => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_han_to_pinyin() {
        assert_eq!(han_to_pinyin("你好"), "nihao");
        // 非漢字は素通し
        assert_eq!(han_to_pinyin("你好abc"), "nihaoabc");
    }

    #[test]
    fn test_hangul_to_latin() {
        assert_eq!(hangul_to_latin("한국"), "hanguk");
        assert_eq!(hangul_to_latin("안녕"), "annyeong");
        // 非ハングルは素通し
        assert_eq!(hangul_to_latin("abc 안"), "abc an");
    }

    #[test]
    fn test_cyrillic_to_latin() {
        assert_eq!(cyrillic_to_latin("привет"), "privet");
        // 大文字は先頭大文字化
        assert_eq!(cyrillic_to_latin("Москва"), "Moskva");
        // 混在テキストでもロシア文字だけ翻字される
        assert_eq!(cyrillic_to_latin("hello мир"), "hello mir");
    }
}
