//! 音素列→カタカナ変換器
//!
//! 番兵付きの列を左から右へ一度だけ走査し、前後 1 トークンの文脈で
//! カナを追記していく。出力の書き戻しは行わない。

use anyhow::{bail, Result};

use crate::kana::phoneme::{parse_sequence, ConsonantPhone, PhonemeToken, VowelPhone};
use crate::kana::tables::{
    kana_row, vowel_class, VowelClass, ROW_GLIDE_W, ROW_GLIDE_Y, ROW_LIQUID, ROW_PLAIN,
};

/// カナ変換器（状態なし、複数スレッドから同時に呼び出し可）
pub struct KanaEngine;

impl KanaEngine {
    pub fn new() -> Self {
        Self
    }

    /// 型付き音素列をカタカナへ変換する
    ///
    /// 列の内部に番兵（`Bos`/`Eos`）が混入している場合は呼び出し規約違反として
    /// エラーを返す。番兵は変換器が内部で付与する。
    pub fn transliterate(&self, phonemes: &[PhonemeToken]) -> Result<String> {
        if phonemes
            .iter()
            .any(|t| matches!(t, PhonemeToken::Bos | PhonemeToken::Eos))
        {
            bail!("音素列の内部に番兵トークンが含まれている");
        }
        Ok(self.convert(phonemes))
    }

    /// 空白区切りの音素表記列を変換する
    ///
    /// 未知コードは読み飛ばされるため、この経路は失敗しない。
    pub fn transliterate_str(&self, transcription: &str) -> String {
        self.convert(&parse_sequence(transcription))
    }

    fn convert(&self, interior: &[PhonemeToken]) -> String {
        let mut seq = Vec::with_capacity(interior.len() + 2);
        seq.push(PhonemeToken::Bos);
        seq.extend_from_slice(interior);
        seq.push(PhonemeToken::Eos);

        let mut yomi = String::new();

        for i in 1..seq.len() - 1 {
            // 語頭の Y はヤ行の表へ差し替える。列そのものを書き換えることで、
            // 後続トークンの後方参照にも差し替え後の表が見える。
            if seq[i - 1] == PhonemeToken::Bos
                && seq[i] == PhonemeToken::Consonant(ConsonantPhone::Y)
            {
                seq[i] = PhonemeToken::Consonant(ConsonantPhone::BosY);
            }

            let prev = seq[i - 1];
            let next = seq[i + 1];

            match seq[i] {
                PhonemeToken::Consonant(c) => {
                    if next.is_vowel() {
                        // 子音＋母音の音節は母音側でまとめて出力する
                        continue;
                    }
                    match (c, next) {
                        // 後続が Y の場合はイ列の先頭文字だけ残す（例: フィ→フ）
                        (_, PhonemeToken::Consonant(ConsonantPhone::Y)) => {
                            if let Some(ch) = kana_row(c).i.chars().next() {
                                yomi.push(ch);
                            }
                        }
                        // D+Z は D を落とす
                        (ConsonantPhone::D, PhonemeToken::Consonant(ConsonantPhone::Z)) => {}
                        // T+S は合成音素 Ts へ融合し、次位置でまとめて処理する
                        (ConsonantPhone::T, PhonemeToken::Consonant(ConsonantPhone::S)) => {
                            seq[i + 1] = PhonemeToken::Consonant(ConsonantPhone::Ts);
                        }
                        // NG の後続が K/G なら撥音「ン」で止める
                        (
                            ConsonantPhone::Ng,
                            PhonemeToken::Consonant(ConsonantPhone::K | ConsonantPhone::G),
                        ) => {
                            if let Some(ch) =
                                kana_row(ConsonantPhone::Ng).bare.chars().next()
                            {
                                yomi.push(ch);
                            }
                        }
                        _ => {
                            if c == ConsonantPhone::R && is_front_vowel(prev) {
                                // 前舌母音直後の R は長音化する
                                yomi.push_str("アー");
                            } else {
                                yomi.push_str(kana_row(c).bare);
                            }
                        }
                    }
                }
                PhonemeToken::Vowel(v) => {
                    let class = vowel_class(v);
                    if let PhonemeToken::Consonant(pc) = prev {
                        // 子音＋母音の音節
                        yomi.push_str(kana_row(pc).get(class));
                    } else {
                        // 母音連続・語頭の母音。直前の二重母音によって行が変わる。
                        let row = match prev {
                            PhonemeToken::Vowel(
                                VowelPhone::Ay | VowelPhone::Ey | VowelPhone::Oy,
                            ) if class != VowelClass::Ambiguous => &ROW_GLIDE_Y,
                            PhonemeToken::Vowel(VowelPhone::Aw | VowelPhone::Uw) => &ROW_GLIDE_W,
                            PhonemeToken::Vowel(VowelPhone::Er) => &ROW_LIQUID,
                            _ => &ROW_PLAIN,
                        };
                        yomi.push_str(row.get(class));
                    }

                    // 二重母音の渡り音
                    if matches!(v, VowelPhone::Ay | VowelPhone::Ey | VowelPhone::Oy) {
                        yomi.push('イ');
                    }
                    // 後続が母音でない位置での長音・渡り
                    if !next.is_vowel() {
                        match v {
                            VowelPhone::Er | VowelPhone::Iy | VowelPhone::Ow | VowelPhone::Uw => {
                                yomi.push('ー')
                            }
                            VowelPhone::Aw => yomi.push('ウ'),
                            _ => {}
                        }
                    }
                }
                // 番兵は transliterate で拒否済み、parse_sequence も生成しない
                PhonemeToken::Bos | PhonemeToken::Eos => {}
            }
        }

        yomi
    }
}

impl Default for KanaEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// 前舌母音（EH/EY/IH/IY）か
fn is_front_vowel(t: PhonemeToken) -> bool {
    matches!(
        t,
        PhonemeToken::Vowel(
            VowelPhone::Eh | VowelPhone::Ey | VowelPhone::Ih | VowelPhone::Iy
        )
    )
}
