/// B0 フレーム (送信コマンド) の組み立て

use crate::rfraw_common_rs::frame::core::exceptions::{FrameParseError, RfRawResult};
use crate::rfraw_common_rs::frame::core::extract::extract_main_data;
use crate::rfraw_common_rs::frame::core::hex_utils::to_hex_byte;
use crate::rfraw_common_rs::frame::types::b1_frame::{B1Payload, BUCKET_HEX_LEN};

/// リピート回数の既定値
pub const DEFAULT_REPEAT_VAL: u32 = 8;

/// 送信用 B0 フレーム
///
/// トークン列 `AA B0 <len> <count> <repeats> <buckets...> <data> 55` を
/// 保持する。各フィールドは16進文字列のまま扱う。
#[derive(Debug, Clone, PartialEq)]
pub struct B0Frame {
    /// 可変部のバイト長（0埋め2桁、ただし0xFF超は全桁）
    pub length_hex: String,
    /// バケット数バイト（B1からそのままコピー）
    pub bucket_count_hex: String,
    /// リピート回数バイト
    pub repeat_hex: String,
    /// タイミングバケット（B1の順序のまま）
    pub buckets: Vec<String>,
    /// データ部（B1からそのままコピー）
    pub data: String,
}

impl B0Frame {
    /// B1 ペイロードから B0 フレームを構築する
    ///
    /// 長さバイトは「バケット数バイト + リピートバイト + バケット列 +
    /// データ部」の16進文字数を2で割ったバイト数。奇数文字数の場合は
    /// 切り捨てで丸める（エラーにしない）。
    ///
    /// Args:
    ///     payload: 構造化済み B1 ペイロード
    ///     repeat_val: リピート回数（この層では範囲チェックしない）
    ///
    /// Returns:
    ///     組み立て済み B0 フレーム
    pub fn from_b1(payload: &B1Payload, repeat_val: u32) -> RfRawResult<Self> {
        // バケット部は宣言されたバケット数で数える（切り詰めがあっても同じ）
        let variable_hex_chars =
            2 + 2 + payload.bucket_count * BUCKET_HEX_LEN + payload.data.len();
        let length_bytes = variable_hex_chars / 2;

        Ok(Self {
            length_hex: to_hex_byte(length_bytes as u32)?,
            bucket_count_hex: payload.bucket_count_hex.clone(),
            repeat_hex: to_hex_byte(repeat_val)?,
            buckets: payload.buckets.clone(),
            data: payload.data.clone(),
        })
    }

    /// スペース区切りのフレーム文字列に直列化する
    ///
    /// 空のバケットやデータ部もトークン位置を占める（連続スペースに
    /// なってもそのまま出力する）。
    pub fn to_frame_string(&self) -> String {
        let mut tokens: Vec<&str> = vec!["AA", "B0", &self.length_hex];
        tokens.push(&self.bucket_count_hex);
        tokens.push(&self.repeat_hex);
        for bucket in &self.buckets {
            tokens.push(bucket);
        }
        tokens.push(&self.data);
        tokens.push("55");
        tokens.join(" ")
    }
}

/// 生の B1 フレーム文字列を B0 フレーム文字列に変換する
///
/// 空白除去・大文字化・エンベロープ照合を行い、ペイロードを
/// バケット数・バケット列・データ部に分解して B0 レイアウトに
/// 組み直す。抽出に失敗した場合（ペイロードが空の場合を含む）のみ
/// エラーを返し、ペイロードが短い・文字数が奇数といった不整合は
/// 切り詰めで許容する。
///
/// Args:
///     inp: 生の B1 フレーム文字列
///     repeat_val: リピート回数バイトの値（既定は DEFAULT_REPEAT_VAL）
///
/// Returns:
///     スペース区切りの B0 フレーム文字列
pub fn convert_b1_to_b0(inp: &str, repeat_val: u32) -> RfRawResult<String> {
    let payload = extract_main_data(inp);
    if payload.is_empty() {
        return Err(FrameParseError::invalid_envelope(inp.trim()).into());
    }

    let b1 = B1Payload::parse(&payload);
    log::debug!(
        "B1ペイロード解析: バケット数={} データ部={}文字",
        b1.bucket_count,
        b1.data.len()
    );

    let b0 = B0Frame::from_b1(&b1, repeat_val)?;
    Ok(b0.to_frame_string())
}
