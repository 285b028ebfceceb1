/// RfRaw フレーム処理用エラー型定義

use std::fmt;
use std::error::Error;

/// フレーム解析エラー
#[derive(Debug, Clone, PartialEq)]
pub enum FrameParseError {
    /// B1 エンベロープ (AAB1 ... 55) に一致しない、またはペイロードが空
    InvalidEnvelope(String),
}

impl fmt::Display for FrameParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameParseError::InvalidEnvelope(input) => {
                write!(f, "B1フレームとして解釈できません: '{}'", input)
            }
        }
    }
}

impl Error for FrameParseError {}

/// フィールド整形エラー
#[derive(Debug, Clone, PartialEq)]
pub enum FrameFieldError {
    /// パディング文字が1文字ではない
    InvalidPadChar { actual: String },
}

impl fmt::Display for FrameFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameFieldError::InvalidPadChar { actual } => {
                write!(f, "パディング文字は1文字でなければなりません: '{}'", actual)
            }
        }
    }
}

impl Error for FrameFieldError {}

/// RfRaw 変換処理の統合エラー型
#[derive(Debug, Clone, PartialEq)]
pub enum RfRawError {
    /// フレーム解析エラー
    Parse(FrameParseError),
    /// フィールド整形エラー
    Field(FrameFieldError),
    /// I/O エラー
    Io(String),
}

impl fmt::Display for RfRawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RfRawError::Parse(err) => write!(f, "フレーム解析エラー: {}", err),
            RfRawError::Field(err) => write!(f, "フィールドエラー: {}", err),
            RfRawError::Io(msg) => write!(f, "I/Oエラー: {}", msg),
        }
    }
}

impl Error for RfRawError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RfRawError::Parse(err) => Some(err),
            RfRawError::Field(err) => Some(err),
            _ => None,
        }
    }
}

// From実装で自動変換をサポート
impl From<FrameParseError> for RfRawError {
    fn from(err: FrameParseError) -> Self {
        RfRawError::Parse(err)
    }
}

impl From<FrameFieldError> for RfRawError {
    fn from(err: FrameFieldError) -> Self {
        RfRawError::Field(err)
    }
}

impl From<std::io::Error> for RfRawError {
    fn from(err: std::io::Error) -> Self {
        RfRawError::Io(err.to_string())
    }
}

/// Result型のエイリアス
pub type RfRawResult<T> = Result<T, RfRawError>;

/// エラーヘルパー関数
impl FrameParseError {
    /// エンベロープ不一致エラーを作成
    pub fn invalid_envelope(input: &str) -> Self {
        FrameParseError::InvalidEnvelope(input.to_string())
    }
}

impl FrameFieldError {
    /// パディング文字エラーを作成
    pub fn invalid_pad_char(actual: &str) -> Self {
        FrameFieldError::InvalidPadChar {
            actual: actual.to_string(),
        }
    }
}
