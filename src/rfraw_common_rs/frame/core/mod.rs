//! フレームコア機能
//! 16進ユーティリティ、ペイロード抽出、エラー処理等のコア機能

pub mod exceptions;
pub mod extract;
pub mod hex_utils;

// 便利な再エクスポート
pub use exceptions::{FrameFieldError, FrameParseError, RfRawError, RfRawResult};
pub use extract::{extract_main_data, remove_spaces};
pub use hex_utils::{left_pad, slice_lenient, to_hex, to_hex_byte};
