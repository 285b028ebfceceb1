/// 16進文字列ユーティリティ
/// 値の16進化・左パディング・寛容なスライス操作

use super::exceptions::{FrameFieldError, RfRawResult};

/// 非負整数を大文字16進文字列に変換する（プレフィックスなし・最小桁数）
///
/// Args:
///     n: 変換する値
///
/// Returns:
///     大文字16進文字列（例: 10 -> "A", 255 -> "FF"）
pub fn to_hex(n: u32) -> String {
    format!("{:X}", n)
}

/// 文字列を指定長まで左パディングする
///
/// すでに指定長以上の場合はそのまま返す。パディングは文字を削ることはない
/// （2桁を超える値は全桁がそのまま残る）。
///
/// Args:
///     s: 対象文字列
///     length: 目標長
///     pad_char: パディング文字（ちょうど1文字であること）
///
/// Returns:
///     パディング済み文字列。pad_char が1文字でなければ
///     FrameFieldError::InvalidPadChar
pub fn left_pad(s: &str, length: usize, pad_char: &str) -> RfRawResult<String> {
    if pad_char.chars().count() != 1 {
        return Err(FrameFieldError::invalid_pad_char(pad_char).into());
    }
    if s.len() >= length {
        return Ok(s.to_string());
    }
    let mut padded = pad_char.repeat(length - s.len());
    padded.push_str(s);
    Ok(padded)
}

/// 値を0埋め2桁の大文字16進バイト表現にする
///
/// 0xFF を超える値は切り詰めず全桁を出力する。
pub fn to_hex_byte(n: u32) -> RfRawResult<String> {
    left_pad(&to_hex(n), 2, "0")
}

/// 範囲を文字列長に収めてスライスする
///
/// start / end が文字列長を超えても panic せず、取得できる範囲だけ
/// （場合によっては空文字列）を返す。短いペイロードのバケットを
/// エラーにせず切り詰めるための操作。
///
/// Args:
///     s: 対象文字列（ASCIIの16進文字列を想定）
///     start: 開始オフセット
///     end: 終了オフセット（排他的）
///
/// Returns:
///     範囲内の部分文字列
pub fn slice_lenient(s: &str, start: usize, end: usize) -> &str {
    let len = s.len();
    let start = start.min(len);
    let end = end.min(len).max(start);
    &s[start..end]
}
