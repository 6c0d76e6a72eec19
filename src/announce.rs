//! 入退室アナウンス文の組み立て
//!
//! ボイスチャンネルの状態変化そのものはここでは扱わない。呼び出し側が
//! 検知したタイミングで文を組み立て、通常のメッセージと同じ整形経路へ流す。

/// 入室アナウンス
pub fn member_joined(display_name: &str) -> String {
    format!("{}さんが入室しました", display_name)
}

/// 退室アナウンス
pub fn member_left(display_name: &str) -> String {
    format!("{}さんが退室しました", display_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_announcements() {
        assert_eq!(member_joined("いか"), "いかさんが入室しました");
        assert_eq!(member_left("たこ"), "たこさんが退室しました");
    }
}
