//! 音素トークン定義
//!
//! ARPABET 系の子音・母音コードを閉じた列挙として持つ。
//! 表引きの取りこぼしを実行時エラーではなくコンパイル時の網羅性検査で防ぐ。

/// 母音音素
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VowelPhone {
    /// 曖昧母音
    Aa,
    /// 曖昧母音
    Ah,
    Ae,
    Ao,
    Aw,
    Ay,
    Eh,
    Er,
    Ey,
    Ih,
    Iy,
    Ow,
    Oy,
    Uh,
    Uw,
}

impl VowelPhone {
    /// コード文字列から母音を引く（ストレス数字は呼び出し側で除去済みであること）
    pub fn from_code(code: &str) -> Option<Self> {
        let v = match code {
            "AA" => Self::Aa,
            "AH" => Self::Ah,
            "AE" => Self::Ae,
            "AO" => Self::Ao,
            "AW" => Self::Aw,
            "AY" => Self::Ay,
            "EH" => Self::Eh,
            "ER" => Self::Er,
            "EY" => Self::Ey,
            "IH" => Self::Ih,
            "IY" => Self::Iy,
            "OW" => Self::Ow,
            "OY" => Self::Oy,
            "UH" => Self::Uh,
            "UW" => Self::Uw,
            _ => return None,
        };
        Some(v)
    }
}

/// 子音音素
///
/// `Ts` と `BosY` は外部入力からは生成されず、変換器が列内で置換する合成音素。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsonantPhone {
    B,
    Ch,
    D,
    Dh,
    F,
    G,
    Hh,
    Jh,
    K,
    L,
    M,
    N,
    Ng,
    P,
    R,
    S,
    Sh,
    T,
    Th,
    V,
    W,
    Y,
    Z,
    Zh,
    /// T+S 融合（ツァ行）
    Ts,
    /// 語頭の Y（ヤ行）
    BosY,
}

impl ConsonantPhone {
    /// コード文字列から子音を引く。合成音素（`Ts`/`BosY`）は対象外。
    pub fn from_code(code: &str) -> Option<Self> {
        let c = match code {
            "B" => Self::B,
            "CH" => Self::Ch,
            "D" => Self::D,
            "DH" => Self::Dh,
            "F" => Self::F,
            "G" => Self::G,
            "HH" => Self::Hh,
            "JH" => Self::Jh,
            "K" => Self::K,
            "L" => Self::L,
            "M" => Self::M,
            "N" => Self::N,
            "NG" => Self::Ng,
            "P" => Self::P,
            "R" => Self::R,
            "S" => Self::S,
            "SH" => Self::Sh,
            "T" => Self::T,
            "TH" => Self::Th,
            "V" => Self::V,
            "W" => Self::W,
            "Y" => Self::Y,
            "Z" => Self::Z,
            "ZH" => Self::Zh,
            _ => return None,
        };
        Some(c)
    }
}

/// 音素トークン
///
/// `Bos`/`Eos` は番兵。変換器が列の両端に付与し、境界条件を通常のルール照合として扱う。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhonemeToken {
    Bos,
    Eos,
    Vowel(VowelPhone),
    Consonant(ConsonantPhone),
}

impl PhonemeToken {
    /// 単一コードを解析する。末尾のストレス数字（CMUdict 形式）は無視する。
    ///
    /// 未知コードは `None`（読み飛ばし対象）。番兵コードは外部入力に現れない。
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim_end_matches(|c: char| c.is_ascii_digit());
        if code.is_empty() {
            return None;
        }
        if let Some(v) = VowelPhone::from_code(code) {
            return Some(Self::Vowel(v));
        }
        ConsonantPhone::from_code(code).map(Self::Consonant)
    }

    /// 母音トークンか
    pub fn is_vowel(&self) -> bool {
        matches!(self, Self::Vowel(_))
    }
}

/// 空白区切りの音素表記列を解析する
///
/// 未知コードは黙って読み飛ばす（fail-open）。
pub fn parse_sequence(transcription: &str) -> Vec<PhonemeToken> {
    let mut tokens = Vec::new();
    for code in transcription.split_whitespace() {
        match PhonemeToken::from_code(code) {
            Some(t) => tokens.push(t),
            None => {
                tracing::debug!("未知の音素コードを読み飛ばし: {}", code);
            }
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_stress_digits() {
        let tokens = parse_sequence("K AE1 T");
        assert_eq!(
            tokens,
            vec![
                PhonemeToken::Consonant(ConsonantPhone::K),
                PhonemeToken::Vowel(VowelPhone::Ae),
                PhonemeToken::Consonant(ConsonantPhone::T),
            ]
        );
    }

    #[test]
    fn test_parse_skips_unknown_codes() {
        // 未知コードは落とし、残りは解析する
        let tokens = parse_sequence("K XY T");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], PhonemeToken::Consonant(ConsonantPhone::K));
        assert_eq!(tokens[1], PhonemeToken::Consonant(ConsonantPhone::T));
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_sequence("").is_empty());
        assert!(parse_sequence("   ").is_empty());
    }

    #[test]
    fn test_synthetic_phones_not_parseable() {
        assert_eq!(PhonemeToken::from_code("T_S"), None);
        assert_eq!(PhonemeToken::from_code("BOS_Y"), None);
        assert_eq!(PhonemeToken::from_code("BOS"), None);
        assert_eq!(PhonemeToken::from_code("EOS"), None);
    }
}
