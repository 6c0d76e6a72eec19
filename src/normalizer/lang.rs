//! 言語・文字種判定
//!
//! 整形後のテキストの文字種から転写経路を振り分ける。
//! 判定不能・空文字列は既定分岐（ラテン文字扱い）に倒す。

use whatlang::Script;

/// 転写経路
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// 中国語（ピンイン化）
    Chinese,
    /// 韓国語（改訂ローマ字化）
    Korean,
    /// 既定（ラテン文字・英語・判定不能）
    Latin,
}

/// 文字種判定で転写経路を決める
pub fn detect_route(text: &str) -> Route {
    if text.is_empty() {
        return Route::Latin;
    }
    match whatlang::detect_script(text) {
        Some(Script::Mandarin) => Route::Chinese,
        Some(Script::Hangul) => Route::Korean,
        other => {
            tracing::trace!("文字種判定 {:?} は既定分岐へ", other);
            Route::Latin
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_chinese() {
        assert_eq!(detect_route("你好世界你好世界"), Route::Chinese);
    }

    #[test]
    fn test_detect_korean() {
        assert_eq!(detect_route("안녕하세요 여러분"), Route::Korean);
    }

    #[test]
    fn test_default_branch() {
        assert_eq!(detect_route("hello world"), Route::Latin);
        // 判定不能でも既定分岐に倒れる（fail-open）
        assert_eq!(detect_route(""), Route::Latin);
        assert_eq!(detect_route("123"), Route::Latin);
    }
}
