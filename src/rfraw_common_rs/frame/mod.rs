//! RfRaw フレーム処理
//! B1 (スニッフ結果) から B0 (送信コマンド) への変換

pub mod core;
pub mod types;
