/// フレームを1行ずつ供給する行指向リーダー

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::rfraw_common_rs::frame::core::exceptions::RfRawResult;

/// テキストファイルから B1 フレーム候補を1行ずつ読み出す
///
/// 各行をそのまま（空白や大小文字の正規化はせず）イテレートする。
/// 正規化と検証は変換側の責務。
pub struct FrameLineSource {
    lines: Lines<BufReader<File>>,
}

impl FrameLineSource {
    /// ファイルを開いて行ソースを作成する
    pub fn open<P: AsRef<Path>>(path: P) -> RfRawResult<Self> {
        let file = File::open(path.as_ref())?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
        })
    }
}

impl Iterator for FrameLineSource {
    type Item = RfRawResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(|res| res.map_err(Into::into))
    }
}
