use clap::Parser;
use log::LevelFilter;
use std::path::Path;
use std::process;

use rfraw_rust::prelude::*;
use rfraw_rust::rfraw_common_rs::utils::config_loader::ConfigLoader;
use rfraw_rust::rfraw_common_rs::utils::line_source::FrameLineSource;

#[derive(Parser)]
#[command(name = "rfraw-cli")]
#[command(about = "RfRaw Converter - B1スニッフ結果をB0送信コマンドに変換")]
#[command(version = "0.1.0")]
#[command(long_about = "
RfRaw B1 -> B0 変換ツール

RFブリッジがスニッフした生フレーム (AA B1 ... 55) を
送信コマンドフレーム (AA B0 ... 55) に変換します。

引数が既存のファイルを指す場合はファイルモードになり、
1行を1フレームとして変換します。不正な行は報告して続行します。

例:
  rfraw-cli 'AA B1 06 12DE 0654 0118 033E 01E0 21E8 581A3A3A3A3B4A3A3B4A3A3B4B4A3A3B4A3A3A3A3A3B4A3B4B4B4B2B2A3A3A3A3A3A3B2A3B2A3B2A3B 55'
  rfraw-cli codes.txt --repeats 20
")]
struct Cli {
    /// B1フレーム文字列、またはフレームを1行ずつ並べたファイルパス
    input: String,

    /// リピート回数バイトの値（省略時は設定ファイルの値、既定 8）
    #[arg(short, long)]
    repeats: Option<u32>,

    /// デバッグモード
    #[arg(short, long)]
    debug: bool,
}

fn init_logging(cli: &Cli, config_level: &str) {
    let level = if cli.debug {
        LevelFilter::Debug
    } else {
        config_level.parse().unwrap_or(LevelFilter::Info)
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

/// ファイルモード: 各行を変換し、不正な行は報告して続行する
fn run_file_mode(path: &Path, repeats: u32) -> Result<(), RfRawError> {
    let mut converted = 0usize;
    let mut failed = 0usize;

    for (line_no, line) in FrameLineSource::open(path)?.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match convert_b1_to_b0(&line, repeats) {
            Ok(b0) => {
                println!("{}", b0);
                converted += 1;
            }
            Err(e) => {
                log::warn!("{}行目の変換に失敗: {}", line_no + 1, e);
                eprintln!("エラー ({}行目): {}", line_no + 1, e);
                failed += 1;
            }
        }
    }

    log::info!("変換完了: 成功 {} 件 / 失敗 {} 件", converted, failed);
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let config = ConfigLoader::new().load().unwrap_or_else(|e| {
        eprintln!("Warning: {}", e);
        Default::default()
    });
    init_logging(&cli, &config.logging.level);

    let repeats = cli.repeats.unwrap_or(config.conversion.default_repeats);
    log::debug!("リピート回数: {}", repeats);

    let path = Path::new(&cli.input);
    if path.is_file() {
        if let Err(e) = run_file_mode(path, repeats) {
            eprintln!("エラー: {}", e);
            process::exit(1);
        }
    } else {
        match convert_b1_to_b0(&cli.input, repeats) {
            Ok(b0) => println!("{}", b0),
            Err(e) => {
                eprintln!("エラー: {}", e);
                process::exit(1);
            }
        }
    }
}
