//! RfRaw 共通モジュール

pub mod frame;
pub mod utils;
