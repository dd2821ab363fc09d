//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::actions::ToolbarAction;
use super::state::{App, SHEET_TABS};
use crate::grid::{self, ROW_INDEX_WIDTH};
use components::{band_color, cell_content, fit, fit_center};
use layouts::screen_chunks;

/// 渲染 UI
///
/// 先划分并缓存屏幕区域（鼠标命中测试依赖它），再逐段绘制
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = screen_chunks(frame.area());
    app.chunks = chunks;

    render_header(frame, app, chunks.header);
    render_toolbar(frame, chunks.toolbar);
    render_bands(frame, app, chunks.bands);
    render_letters(frame, app, chunks.letters);
    render_labels(frame, app, chunks.labels);
    render_body(frame, app, chunks.body);
    render_tabs(frame, app, chunks.tabs);
    render_footer(frame, app, chunks.footer);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let crumbs = Line::from(vec![
        Span::styled(
            "Workspace › Folder 2 › ",
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            app.sheet.meta.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    // 🔔 渲染占 2 格，宽度手工计
    let profile = "Search within Sheet   🔔2   John Doe @johndoe";
    let profile_width = 45;

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(profile_width)])
        .split(inner);
    frame.render_widget(Paragraph::new(crumbs), cols[0]);
    frame.render_widget(
        Paragraph::new(profile).style(Style::default().fg(Color::DarkGray)),
        cols[1],
    );
}

fn render_toolbar(frame: &mut Frame, area: Rect) {
    let mut line = Vec::new();
    for (i, trigger) in ToolbarAction::ALL.iter().enumerate() {
        if i > 0 {
            line.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
        }
        line.push(Span::styled(
            format!(" {} ", trigger.label()),
            Style::default().fg(Color::Gray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(line)), area);
}

/// 分组带：每条带横跨若干列的累计宽度，越界的跨度在网格边缘截断
fn render_bands(frame: &mut Frame, app: &App, area: Rect) {
    let spans_geo = app.column_spans();
    let mut line = vec![Span::raw(" ".repeat(ROW_INDEX_WIDTH as usize))];
    let mut col = 0usize;
    for band in &app.sheet.bands {
        if col >= spans_geo.len() {
            break;
        }
        let end = (col + band.span).min(spans_geo.len());
        let width: u16 = spans_geo[col..end].iter().map(|s| s.width).sum();
        line.push(Span::styled(
            fit_center(&band.label, width),
            Style::default()
                .fg(Color::Black)
                .bg(band_color(&band.color)),
        ));
        col = end;
    }
    frame.render_widget(Paragraph::new(Line::from(line)), area);
}

/// 字母行：A、B、C……按列宽居中
fn render_letters(frame: &mut Frame, app: &App, area: Rect) {
    let dim = Style::default().fg(Color::DarkGray);
    let mut line = vec![Span::raw(" ".repeat(ROW_INDEX_WIDTH as usize))];
    for span in app.column_spans() {
        line.push(Span::styled(
            fit_center(&grid::column_letter(span.index), span.width - 1),
            dim,
        ));
        line.push(Span::styled("│", dim));
    }
    frame.render_widget(Paragraph::new(Line::from(line)), area);
}

/// 列名行：列名加排序箭头；每列最右一格是拖拽手柄
fn render_labels(frame: &mut Frame, app: &App, area: Rect) {
    let spans_geo = app.column_spans();
    let mut line = vec![Span::raw(" ".repeat(ROW_INDEX_WIDTH as usize))];
    for (spec, span) in app.visible_columns().iter().zip(&spans_geo) {
        let mut text = spec.label.clone();
        let mut style = Style::default().add_modifier(Modifier::BOLD);
        if let Some(sort) = &app.sort {
            if sort.key == spec.key {
                text = format!("{} {}", spec.label, sort.order.arrow());
                style = style.fg(Color::Yellow);
            }
        }
        line.push(Span::styled(fit(&text, span.width - 1), style));
        line.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
    }
    frame.render_widget(Paragraph::new(Line::from(line)), area);
}

fn render_body(frame: &mut Frame, app: &mut App, area: Rect) {
    let spans_geo = app.column_spans();
    let keys: Vec<String> = app
        .visible_columns()
        .iter()
        .map(|c| c.key.clone())
        .collect();
    let selected_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED);

    let items: Vec<ListItem> = app
        .display_rows
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let mut line = vec![Span::styled(
                format!("{:>width$} ", i + 1, width = ROW_INDEX_WIDTH as usize - 1),
                Style::default().fg(Color::DarkGray),
            )];
            for (col_idx, (key, span)) in keys.iter().zip(&spans_geo).enumerate() {
                let (text, style) = cell_content(record, key);
                let style = if app.selected == Some((i, col_idx)) {
                    selected_style
                } else {
                    style
                };
                line.push(Span::styled(fit(&text, span.width - 1), style));
                line.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            let mut item = ListItem::new(Line::from(line));
            if app.hovered_row == Some(i) {
                item = item.style(Style::default().bg(Color::DarkGray));
            }
            item
        })
        .collect();

    frame.render_stateful_widget(List::new(items), area, &mut app.body_state);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let mut line = Vec::new();
    for (i, tab) in SHEET_TABS.iter().enumerate() {
        if i > 0 {
            line.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
        }
        let style = if i == app.active_tab {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        line.push(Span::styled(format!(" {} ", tab), style));
    }
    line.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
    line.push(Span::styled(" + ", Style::default().fg(Color::Gray)));
    frame.render_widget(Paragraph::new(Line::from(line)), area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let count = app.sheet.rows.len();
    let base = format!(
        "Showing {} of {} records    [↑↓←→] 移动选区  [Tab] 标签页  [q] 退出",
        count, count
    );
    let text = match app.message.as_deref() {
        Some(message) if !message.is_empty() => format!("{}  |  {}", base, message),
        _ => base,
    };

    let footer = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
