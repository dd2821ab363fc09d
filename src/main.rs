mod cli;
mod grid;
mod models;
mod storage;
mod ui;

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::CliArgs;
use crate::models::Sheet;
use crate::storage::load_sheet;
use crate::ui::{App, render};

/// 获取数据目录路径 (~/.local/share/trellis/)
fn get_data_dir() -> io::Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "无法获取用户数据目录"))?
        .join("trellis");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

fn logs_dir() -> io::Result<PathBuf> {
    let dir = get_data_dir()?.join("logs");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// 初始化日志：只写文件，终端留给 TUI
///
/// 过滤级别由 RUST_LOG 控制，默认 info；日志按天滚动
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = match logs_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "trellis.log");
            Some(
                fmt::layer()
                    .with_writer(appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_filter(filter),
            )
        }
        Err(e) => {
            eprintln!("警告: 无法初始化文件日志: {}", e);
            None
        }
    };

    tracing_subscriber::registry().with(file_layer).init();
}

/// 决定挂载哪张表：命令行指定的文件、默认数据文件、或内置示例
fn resolve_sheet(args: &CliArgs) -> Result<Sheet> {
    if let Some(path) = &args.sheet {
        return load_sheet(path);
    }

    let default_path = get_data_dir()
        .context("无法获取数据目录")?
        .join("sheet.toml");
    if default_path.exists() {
        return load_sheet(&default_path);
    }

    tracing::info!("未指定表格文件，使用内置示例数据");
    Ok(Sheet::sample())
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing();

    let sheet = resolve_sheet(&args)?;
    let mut app = App::new(sheet);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(result?)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        match crossterm::event::read()? {
            crossterm::event::Event::Key(key) => {
                if key.kind == crossterm::event::KeyEventKind::Press
                    && ui::handle_key_event(app, key.code)?
                {
                    break;
                }
            }
            crossterm::event::Event::Mouse(mouse) => {
                if ui::handle_mouse_event(app, mouse)? {
                    break;
                }
            }
            _ => {}
        }
    }
    Ok(())
}
