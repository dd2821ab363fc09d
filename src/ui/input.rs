//! 输入事件映射 (Input -> Action)
//!
//! 将键盘与鼠标事件转换为 Action

use std::io;

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::actions::{Action, ToolbarAction};
use super::state::{App, SHEET_TABS};
use super::view::components::{tab_spans, toolbar_spans};
use crate::grid::{self, ColumnHit};

/// 按键到 Action 的映射
pub fn get_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Up => Some(Action::MoveSelectionUp),
        KeyCode::Down => Some(Action::MoveSelectionDown),
        KeyCode::Left => Some(Action::MoveSelectionLeft),
        KeyCode::Right => Some(Action::MoveSelectionRight),
        KeyCode::Tab => Some(Action::NextTab),
        KeyCode::BackTab => Some(Action::PrevTab),
        KeyCode::Char('+') => Some(Action::AddTab),
        KeyCode::Char(c @ '1'..='4') => Some(Action::SelectTab(c as usize - '1' as usize)),
        KeyCode::Char('t') => Some(Action::Toolbar(ToolbarAction::ToolBar)),
        KeyCode::Char('h') => Some(Action::Toolbar(ToolbarAction::HideFields)),
        KeyCode::Char('o') => Some(Action::Toolbar(ToolbarAction::Sort)),
        KeyCode::Char('f') => Some(Action::Toolbar(ToolbarAction::Filter)),
        KeyCode::Char('c') => Some(Action::Toolbar(ToolbarAction::CellView)),
        KeyCode::Char('i') => Some(Action::Toolbar(ToolbarAction::Import)),
        KeyCode::Char('x') => Some(Action::Toolbar(ToolbarAction::Export)),
        KeyCode::Char('s') => Some(Action::Toolbar(ToolbarAction::Share)),
        KeyCode::Char('n') => Some(Action::Toolbar(ToolbarAction::NewAction)),
        _ => None,
    }
}

/// 鼠标事件到 Action 的映射；基于渲染时缓存的区域做命中测试
pub fn mouse_action(app: &App, mouse: MouseEvent) -> Option<Action> {
    let pos = Position::new(mouse.column, mouse.row);
    let chunks = app.chunks;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if chunks.labels.contains(pos) {
                return match grid::hit_header(&app.column_spans(), mouse.column)? {
                    ColumnHit::Handle(col) => Some(Action::ResizeStart { col, x: mouse.column }),
                    ColumnHit::Cell(col) => Some(Action::SortBy(col)),
                };
            }
            if chunks.body.contains(pos) {
                let row = body_row_at(app, mouse.row)?;
                let col = grid::hit_cell(&app.column_spans(), mouse.column)?;
                return Some(Action::SelectCell(row, col));
            }
            if chunks.toolbar.contains(pos) {
                return toolbar_spans(chunks.toolbar.x)
                    .iter()
                    .find(|(_, span)| span.contains(mouse.column))
                    .map(|(trigger, _)| Action::Toolbar(*trigger));
            }
            if chunks.tabs.contains(pos) {
                let spans = tab_spans(chunks.tabs.x);
                let hit = spans.iter().position(|s| s.contains(mouse.column))?;
                return if hit < SHEET_TABS.len() {
                    Some(Action::SelectTab(hit))
                } else {
                    Some(Action::AddTab)
                };
            }
            None
        }
        // 拖拽会话存续期间，指针走到哪列宽就跟到哪
        MouseEventKind::Drag(MouseButton::Left) if app.resize.is_some() => {
            Some(Action::ResizeMove { x: mouse.column })
        }
        MouseEventKind::Up(MouseButton::Left) if app.resize.is_some() => Some(Action::ResizeEnd),
        MouseEventKind::Moved => {
            // 悬停高亮是交互提示，空行（填充行）不给
            let row = chunks
                .body
                .contains(pos)
                .then(|| body_row_at(app, mouse.row))
                .flatten()
                .filter(|&row| !app.row_is_empty(row));
            (row != app.hovered_row).then_some(Action::HoverRow(row))
        }
        MouseEventKind::ScrollUp if chunks.body.contains(pos) => Some(Action::ScrollUp),
        MouseEventKind::ScrollDown if chunks.body.contains(pos) => Some(Action::ScrollDown),
        _ => None,
    }
}

/// 表体内纵坐标对应的显示行（计入滚动偏移）
fn body_row_at(app: &App, y: u16) -> Option<usize> {
    let body = app.chunks.body;
    let row = y.checked_sub(body.y)? as usize + app.body_state.offset();
    (row < app.display_rows.len()).then_some(row)
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

/// 处理鼠标事件
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> io::Result<bool> {
    if let Some(action) = mouse_action(app, mouse) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}
