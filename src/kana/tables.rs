//! 音素→カナの静的変換表
//!
//! 子音ごとの後続母音別カナ表と、母音→短母音クラスの対応表。
//! 表はプロセス起動時から不変で、実行中に書き換えられることはない。

use crate::kana::phoneme::{ConsonantPhone, VowelPhone};

/// 短母音クラス
///
/// `Ambiguous` は曖昧母音（AA/AH）。単独では何も出力せず、
/// 子音の後では bare エントリを選ぶ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VowelClass {
    A,
    I,
    U,
    E,
    O,
    Ambiguous,
}

/// 母音音素を短母音クラスに割り振る
pub fn vowel_class(v: VowelPhone) -> VowelClass {
    match v {
        VowelPhone::Aa | VowelPhone::Ah => VowelClass::Ambiguous,
        VowelPhone::Ae | VowelPhone::Aw | VowelPhone::Ay | VowelPhone::Er => VowelClass::A,
        VowelPhone::Ao | VowelPhone::Ow | VowelPhone::Oy => VowelClass::O,
        VowelPhone::Eh | VowelPhone::Ey => VowelClass::E,
        VowelPhone::Ih | VowelPhone::Iy => VowelClass::I,
        VowelPhone::Uh | VowelPhone::Uw => VowelClass::U,
    }
}

/// 子音 1 つ分のカナ表
///
/// `bare` は後続母音が無い場合（語末・子音連続）のエントリ。全子音で非空。
#[derive(Debug, Clone, Copy)]
pub struct KanaRow {
    pub a: &'static str,
    pub i: &'static str,
    pub u: &'static str,
    pub e: &'static str,
    pub o: &'static str,
    pub bare: &'static str,
}

impl KanaRow {
    /// 母音クラスに対応するエントリを返す。`Ambiguous` は bare を選ぶ。
    pub fn get(&self, class: VowelClass) -> &'static str {
        match class {
            VowelClass::A => self.a,
            VowelClass::I => self.i,
            VowelClass::U => self.u,
            VowelClass::E => self.e,
            VowelClass::O => self.o,
            VowelClass::Ambiguous => self.bare,
        }
    }
}

/// 母音単独のカナ表（ア行・ヤ行・ワ行・ラ行）
///
/// `Ambiguous` クラスは空文字列（出力なし）。
#[derive(Debug, Clone, Copy)]
pub struct VowelRow {
    pub a: &'static str,
    pub i: &'static str,
    pub u: &'static str,
    pub e: &'static str,
    pub o: &'static str,
}

impl VowelRow {
    pub fn get(&self, class: VowelClass) -> &'static str {
        match class {
            VowelClass::A => self.a,
            VowelClass::I => self.i,
            VowelClass::U => self.u,
            VowelClass::E => self.e,
            VowelClass::O => self.o,
            VowelClass::Ambiguous => "",
        }
    }
}

/// ア行（母音単独の既定）
pub const ROW_PLAIN: VowelRow = VowelRow { a: "ア", i: "イ", u: "ウ", e: "エ", o: "オ" };
/// ヤ行（前が AY/EY/OY の二重母音だった場合）
pub const ROW_GLIDE_Y: VowelRow = VowelRow { a: "ヤ", i: "イ", u: "ユ", e: "エ", o: "ヨ" };
/// ワ行（前が AW/UW だった場合）
pub const ROW_GLIDE_W: VowelRow = VowelRow { a: "ワ", i: "ウィ", u: "ウ", e: "ウェ", o: "ウォ" };
/// ラ行（前が ER だった場合）
pub const ROW_LIQUID: VowelRow = VowelRow { a: "ラ", i: "リ", u: "ル", e: "レ", o: "ロ" };

const ROW_B: KanaRow = KanaRow { a: "バ", i: "ビ", u: "ブ", e: "ベ", o: "ボ", bare: "ブ" };
const ROW_CH: KanaRow = KanaRow { a: "チャ", i: "チ", u: "チュ", e: "チェ", o: "チョ", bare: "チ" };
const ROW_D: KanaRow = KanaRow { a: "ダ", i: "ディ", u: "ドゥ", e: "デ", o: "ド", bare: "ド" };
const ROW_DH: KanaRow = KanaRow { a: "ザ", i: "ジ", u: "ズ", e: "ゼ", o: "ゾ", bare: "ズ" };
const ROW_F: KanaRow = KanaRow { a: "ファ", i: "フィ", u: "フ", e: "フェ", o: "フォ", bare: "フ" };
const ROW_G: KanaRow = KanaRow { a: "ガ", i: "ギ", u: "グ", e: "ゲ", o: "ゴ", bare: "グ" };
const ROW_HH: KanaRow = KanaRow { a: "ハ", i: "ヒ", u: "フ", e: "ヘ", o: "ホ", bare: "フ" };
const ROW_JH: KanaRow = KanaRow { a: "ジャ", i: "ジ", u: "ジュ", e: "ジェ", o: "ジョ", bare: "ジ" };
const ROW_K: KanaRow = KanaRow { a: "カ", i: "キ", u: "ク", e: "ケ", o: "コ", bare: "ク" };
const ROW_L: KanaRow = KanaRow { a: "ラ", i: "リ", u: "ル", e: "レ", o: "ロ", bare: "ル" };
const ROW_M: KanaRow = KanaRow { a: "マ", i: "ミ", u: "ム", e: "メ", o: "モ", bare: "ム" };
const ROW_N: KanaRow = KanaRow { a: "ナ", i: "ニ", u: "ヌ", e: "ネ", o: "ノ", bare: "ン" };
const ROW_NG: KanaRow = KanaRow { a: "ンガ", i: "ンギ", u: "ング", e: "ンゲ", o: "ンゴ", bare: "ング" };
const ROW_P: KanaRow = KanaRow { a: "パ", i: "ピ", u: "プ", e: "ペ", o: "ポ", bare: "プ" };
const ROW_R: KanaRow = KanaRow { a: "ラ", i: "リ", u: "ル", e: "レ", o: "ロ", bare: "ー" };
const ROW_S: KanaRow = KanaRow { a: "サ", i: "シ", u: "ス", e: "セ", o: "ソ", bare: "ス" };
const ROW_SH: KanaRow = KanaRow { a: "シャ", i: "シ", u: "シュ", e: "シェ", o: "ショ", bare: "シュ" };
const ROW_T: KanaRow = KanaRow { a: "タ", i: "ティ", u: "チュ", e: "テ", o: "ト", bare: "ト" };
const ROW_TH: KanaRow = KanaRow { a: "サ", i: "シ", u: "シュ", e: "セ", o: "ソ", bare: "ス" };
const ROW_V: KanaRow = KanaRow { a: "バ", i: "ビ", u: "ブ", e: "ベ", o: "ボ", bare: "ブ" };
const ROW_W: KanaRow = KanaRow { a: "ワ", i: "ウィ", u: "ウ", e: "ウェ", o: "ウォ", bare: "ウ" };
// 語中の Y は拗音の後半として振る舞うため i 列が空になる
const ROW_Y: KanaRow = KanaRow { a: "ア", i: "", u: "ュ", e: "エ", o: "ョ", bare: "イ" };
const ROW_BOS_Y: KanaRow = KanaRow { a: "ヤ", i: "イ", u: "ユ", e: "イエ", o: "ヨ", bare: "イ" };
const ROW_Z: KanaRow = KanaRow { a: "ザ", i: "ジ", u: "ズ", e: "ゼ", o: "ゾ", bare: "ズ" };
const ROW_ZH: KanaRow = KanaRow { a: "ジャ", i: "ジ", u: "ジュ", e: "ジェ", o: "ジョ", bare: "ジュ" };
const ROW_TS: KanaRow = KanaRow { a: "ツァ", i: "ツィ", u: "ツ", e: "ツェ", o: "ツォ", bare: "ツ" };

/// 子音のカナ表を引く
pub fn kana_row(c: ConsonantPhone) -> &'static KanaRow {
    match c {
        ConsonantPhone::B => &ROW_B,
        ConsonantPhone::Ch => &ROW_CH,
        ConsonantPhone::D => &ROW_D,
        ConsonantPhone::Dh => &ROW_DH,
        ConsonantPhone::F => &ROW_F,
        ConsonantPhone::G => &ROW_G,
        ConsonantPhone::Hh => &ROW_HH,
        ConsonantPhone::Jh => &ROW_JH,
        ConsonantPhone::K => &ROW_K,
        ConsonantPhone::L => &ROW_L,
        ConsonantPhone::M => &ROW_M,
        ConsonantPhone::N => &ROW_N,
        ConsonantPhone::Ng => &ROW_NG,
        ConsonantPhone::P => &ROW_P,
        ConsonantPhone::R => &ROW_R,
        ConsonantPhone::S => &ROW_S,
        ConsonantPhone::Sh => &ROW_SH,
        ConsonantPhone::T => &ROW_T,
        ConsonantPhone::Th => &ROW_TH,
        ConsonantPhone::V => &ROW_V,
        ConsonantPhone::W => &ROW_W,
        ConsonantPhone::Y => &ROW_Y,
        ConsonantPhone::Z => &ROW_Z,
        ConsonantPhone::Zh => &ROW_ZH,
        ConsonantPhone::Ts => &ROW_TS,
        ConsonantPhone::BosY => &ROW_BOS_Y,
    }
}
