/// ユーティリティ

pub mod config_loader;
pub mod line_source;

// 便利な再エクスポート
pub use config_loader::{ConfigLoader, ConversionConfig, LogConfig, RfRawConfig};
pub use line_source::FrameLineSource;
