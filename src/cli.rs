//! 命令行参数

use clap::Parser;
use std::path::PathBuf;

/// 终端里的电子表格视图
#[derive(Parser, Debug)]
#[command(
    name = "trellis",
    version,
    about = "A spreadsheet-style table viewer for the terminal"
)]
pub struct CliArgs {
    /// Sheet TOML file to open (defaults to the data-dir sheet, then the built-in sample)
    #[arg(value_name = "SHEET")]
    pub sheet: Option<PathBuf>,
}
