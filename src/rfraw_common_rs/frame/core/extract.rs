/// B1 フレームの正規化とペイロード抽出

use once_cell::sync::Lazy;
use regex::Regex;

// 空白類（スペース・タブ・改行）の連続
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

// B1 エンベロープ: AAB1 + 16進ペイロード + 55（前後に余分な文字を許さない）
static B1_ENVELOPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(AAB1)([0-9A-F]*)(55)$").expect("B1 envelope regex"));

/// 空白類をすべて除去する
///
/// 1文字以上の空白の連続を区切り文字に置換せず完全に削除する。
/// 常に成功する全域関数。
///
/// Args:
///     s: 任意の文字列
///
/// Returns:
///     空白を含まない文字列
pub fn remove_spaces(s: &str) -> String {
    WHITESPACE.replace_all(s, "").into_owned()
}

/// 正規化済み文字列から B1 ペイロードを取り出す（内部用）
///
/// エンベロープに一致しなければ None。一致すればキャプチャした
/// ペイロード（空文字列の場合もある）。
fn match_envelope(normalized: &str) -> Option<String> {
    B1_ENVELOPE
        .captures(normalized)
        .map(|caps| caps[2].to_string())
}

/// 生の B1 フレーム文字列からメインデータ部を抽出する
///
/// 空白除去と大文字化を行ったうえで `AAB1 <hex>* 55` に照合し、
/// 内側のペイロードを返す。一致しない場合は空文字列を返す
/// （エラーにはしない。呼び出し側は空文字列を抽出失敗として扱う）。
///
/// Args:
///     inp: 生のフレーム文字列（大小文字・空白は任意）
///
/// Returns:
///     ペイロードの16進文字列。失敗時は ""
pub fn extract_main_data(inp: &str) -> String {
    let normalized = remove_spaces(inp).to_uppercase();
    match_envelope(&normalized).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_spaces() {
        assert_eq!(remove_spaces("AA B1 55"), "AAB155");
        assert_eq!(remove_spaces("  AA\tB1\n55  "), "AAB155");
        assert_eq!(remove_spaces("AAB155"), "AAB155");
        assert_eq!(remove_spaces(""), "");
    }

    #[test]
    fn test_extract_basic() {
        assert_eq!(extract_main_data("AAB10155"), "01");
        assert_eq!(extract_main_data("AA B1 01 55"), "01");
        // 小文字も受理する
        assert_eq!(extract_main_data("aa b1 01 55"), "01");
    }

    #[test]
    fn test_extract_normalization_invariance() {
        // 空白・大小文字の揺れがあっても正規形と同じペイロードになる
        let canonical = extract_main_data("AAB10612DE065455");
        assert_eq!(extract_main_data(" aA b1 06 12dE 0654 5 5"), canonical);
        assert_eq!(extract_main_data("AA\tB1\n06 12DE 0654 55"), canonical);
        assert!(!canonical.is_empty());
    }

    #[test]
    fn test_extract_failure_returns_empty() {
        // エンベロープ不一致はすべて空文字列
        assert_eq!(extract_main_data("FFFF"), "");
        assert_eq!(extract_main_data(""), "");
        assert_eq!(extract_main_data("AAB101"), "");
        assert_eq!(extract_main_data("B10155"), "");
        assert_eq!(extract_main_data("AAB1GG55"), "");
        // 前後に余分な文字があれば不一致
        assert_eq!(extract_main_data("XXAAB10155"), "");
        assert_eq!(extract_main_data("AAB1015500"), "");
    }

    #[test]
    fn test_extract_empty_payload() {
        // AAB155 はペイロードが空。抽出失敗と同じ "" になる
        assert_eq!(extract_main_data("AAB155"), "");
        assert_eq!(extract_main_data("AA B1 55"), "");
    }
}
