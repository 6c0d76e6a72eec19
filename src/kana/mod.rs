//! 音素→カタカナ変換
//!
//! ARPABET 系の音素列を、前後 1 トークンの文脈を見る単方向走査で
//! カタカナ文字列へ変換する。
//!
//! ## 処理の骨格
//! 1. 列の両端に番兵（BOS/EOS）を付与
//! 2. 内側の位置だけを左から右へ走査
//! 3. 子音は後続母音の有無で分岐、母音は短母音クラスに割り振って出力

mod engine;
mod phoneme;
mod tables;

pub use engine::KanaEngine;
pub use phoneme::{parse_sequence, ConsonantPhone, PhonemeToken, VowelPhone};
