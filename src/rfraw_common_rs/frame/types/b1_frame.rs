/// B1 フレーム (スニッフ結果) のペイロード構造

use crate::rfraw_common_rs::frame::core::hex_utils::slice_lenient;

/// バケット1個あたりの16進文字数（2バイト = マイクロ秒幅）
pub const BUCKET_HEX_LEN: usize = 4;

/// 抽出済み B1 ペイロードを構造化したもの
///
/// バケット数バイト・タイミングバケット列・後続データに分解する。
/// ペイロードが宣言されたバケット数に足りない場合、後方のバケットは
/// 切り詰められるか空文字列になる（エラーにはしない）。
#[derive(Debug, Clone, PartialEq)]
pub struct B1Payload {
    /// バケット数バイトの16進表現（先頭2文字、そのまま保持）
    pub bucket_count_hex: String,
    /// バケット数（バケット数バイトの値）
    pub bucket_count: usize,
    /// タイミングバケット（各 BUCKET_HEX_LEN 文字、末尾は切り詰めあり）
    pub buckets: Vec<String>,
    /// バケット列の後ろに続くデータ部（そのまま保持）
    pub data: String,
}

impl B1Payload {
    /// 抽出済みペイロード文字列を分解する
    ///
    /// Args:
    ///     payload: extract_main_data が返した16進文字列（空でないこと）
    ///
    /// Returns:
    ///     構造化されたペイロード
    pub fn parse(payload: &str) -> Self {
        let bucket_count_hex = slice_lenient(payload, 0, 2).to_string();
        // 抽出器が16進文字であることを保証しているため解析は失敗しない
        let bucket_count = usize::from_str_radix(&bucket_count_hex, 16).unwrap_or(0);

        let mut buckets = Vec::with_capacity(bucket_count);
        for i in 0..bucket_count {
            let start = 2 + i * BUCKET_HEX_LEN;
            buckets.push(slice_lenient(payload, start, start + BUCKET_HEX_LEN).to_string());
        }

        let data = slice_lenient(payload, 2 + bucket_count * BUCKET_HEX_LEN, payload.len())
            .to_string();

        Self {
            bucket_count_hex,
            bucket_count,
            buckets,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed() {
        // バケット数2、バケット2個、後続データ
        let p = B1Payload::parse("0212DE0654ABCD");
        assert_eq!(p.bucket_count_hex, "02");
        assert_eq!(p.bucket_count, 2);
        assert_eq!(p.buckets, vec!["12DE", "0654"]);
        assert_eq!(p.data, "ABCD");
    }

    #[test]
    fn test_parse_no_data() {
        let p = B1Payload::parse("0112DE");
        assert_eq!(p.bucket_count, 1);
        assert_eq!(p.buckets, vec!["12DE"]);
        assert_eq!(p.data, "");
    }

    #[test]
    fn test_parse_zero_buckets() {
        let p = B1Payload::parse("00FFEE");
        assert_eq!(p.bucket_count, 0);
        assert!(p.buckets.is_empty());
        // バケットがなければ残りはすべてデータ部
        assert_eq!(p.data, "FFEE");
    }

    #[test]
    fn test_parse_short_payload_truncates() {
        // 宣言は3バケットだが2個目の途中で尽きる
        let p = B1Payload::parse("0312DE06");
        assert_eq!(p.bucket_count, 3);
        assert_eq!(p.buckets, vec!["12DE", "06", ""]);
        assert_eq!(p.data, "");
    }

    #[test]
    fn test_parse_single_char_count() {
        // バケット数バイトが1文字しかない場合も1桁の16進として解釈する
        let p = B1Payload::parse("5");
        assert_eq!(p.bucket_count_hex, "5");
        assert_eq!(p.bucket_count, 5);
        assert_eq!(p.buckets, vec!["", "", "", "", ""]);
        assert_eq!(p.data, "");
    }
}
