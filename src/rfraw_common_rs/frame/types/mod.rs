/// フレーム型定義
pub mod b0_frame;
pub mod b1_frame;

// 再エクスポート
pub use b0_frame::{convert_b1_to_b0, B0Frame, DEFAULT_REPEAT_VAL};
pub use b1_frame::{B1Payload, BUCKET_HEX_LEN};
