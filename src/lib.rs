/// RfRaw Rust Implementation
/// B1/B0 frame conversion utilities for RF bridge raw codes

pub mod rfraw_common_rs;

// 便利な再エクスポート
pub mod prelude {
    pub use crate::rfraw_common_rs::frame::core::exceptions::{RfRawError, RfRawResult};
    pub use crate::rfraw_common_rs::frame::core::extract::{extract_main_data, remove_spaces};
    pub use crate::rfraw_common_rs::frame::core::hex_utils::{left_pad, to_hex};
    pub use crate::rfraw_common_rs::frame::types::{convert_b1_to_b0, B0Frame, B1Payload, DEFAULT_REPEAT_VAL};
}
