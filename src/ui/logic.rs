//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各状态迁移方法

use super::actions::{Action, ToolbarAction};
use super::state::{App, SHEET_TABS, SortOrder, SortState};
use crate::grid::ResizeDrag;

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,

            Action::MoveSelectionUp => self.move_selection(-1, 0),
            Action::MoveSelectionDown => self.move_selection(1, 0),
            Action::MoveSelectionLeft => self.move_selection(0, -1),
            Action::MoveSelectionRight => self.move_selection(0, 1),
            Action::SelectCell(row, col) => self.select_cell(row, col),

            Action::SortBy(col) => self.sort_by(col),
            Action::ResizeStart { col, x } => self.start_resize(col, x),
            Action::ResizeMove { x } => self.update_resize(x),
            Action::ResizeEnd => self.end_resize(),

            Action::Toolbar(trigger) => self.trigger_toolbar(trigger),
            Action::NextTab => self.switch_tab((self.active_tab + 1) % SHEET_TABS.len()),
            Action::PrevTab => {
                self.switch_tab((self.active_tab + SHEET_TABS.len() - 1) % SHEET_TABS.len())
            }
            Action::SelectTab(index) => {
                if index < SHEET_TABS.len() {
                    self.switch_tab(index);
                }
            }
            Action::AddTab => self.request_new_tab(),
            Action::HoverRow(row) => self.hovered_row = row,
            Action::ScrollUp => self.scroll_body(-3),
            Action::ScrollDown => self.scroll_body(3),
        }
        false
    }

    // ============ 选区与导航 ============

    /// 点击选中单元格；空行没有这个交互
    pub fn select_cell(&mut self, row: usize, col: usize) {
        if self.row_is_empty(row) || col >= self.visible_columns().len() {
            return;
        }
        self.selected = Some((row, col));
        // 列表选中项带动渲染时的自动滚动
        self.body_state.select(Some(row));
    }

    /// 方向键移动选区：无选区时忽略，越界钳制不回绕
    pub fn move_selection(&mut self, d_row: i32, d_col: i32) {
        let Some((row, col)) = self.selected else {
            return;
        };
        // 钳制上界取真实记录数，不含填充行
        let max_row = self.sheet.rows.len().saturating_sub(1);
        let max_col = self.visible_columns().len().saturating_sub(1);
        let row = (row as i32 + d_row).clamp(0, max_row as i32) as usize;
        let col = (col as i32 + d_col).clamp(0, max_col as i32) as usize;
        self.selected = Some((row, col));
        self.body_state.select(Some(row));
    }

    // ============ 排序指令 ============

    /// 点击表头：同列在升降序间切换，换列重置为升序；仅记录状态
    pub fn sort_by(&mut self, col: usize) {
        let Some(spec) = self.visible_columns().get(col).copied() else {
            return;
        };
        if !spec.sortable {
            return;
        }
        let key = spec.key.clone();
        let order = match &self.sort {
            Some(current) if current.key == key => current.order.toggled(),
            _ => SortOrder::Ascending,
        };
        tracing::debug!("排序指令: {} {:?}", key, order);
        self.sort = Some(SortState { key, order });
    }

    // ============ 列宽拖拽 ============

    /// 在手柄上按下：捕获起点与起始宽度，开启唯一会话
    pub fn start_resize(&mut self, col: usize, x: u16) {
        let Some(spec) = self.visible_columns().get(col).copied() else {
            return;
        };
        let key = spec.key.clone();
        let start_width = spec.width;
        self.resize = Some(ResizeDrag {
            key,
            start_x: x,
            start_width,
        });
    }

    /// 拖拽移动：按像素公式算出新宽并立即应用到列模型
    pub fn update_resize(&mut self, x: u16) {
        let Some(drag) = &self.resize else {
            return;
        };
        let width = drag.width_at(x);
        let key = drag.key.clone();
        self.sheet.set_column_width(&key, width);
    }

    /// 松开指针：无论落在哪里都结束会话
    pub fn end_resize(&mut self) {
        if let Some(drag) = self.resize.take() {
            tracing::debug!("列宽拖拽结束: {}", drag.key);
        }
    }

    // ============ 工具栏与标签页 ============

    /// 工具栏触发器：诊断日志 + 状态栏提示，无其他效果
    pub fn trigger_toolbar(&mut self, trigger: ToolbarAction) {
        let text = format!("{} action triggered", trigger.label());
        tracing::info!("{}", text);
        self.message = Some(text);
    }

    /// 切换活动标签页（仅展示状态）
    pub fn switch_tab(&mut self, index: usize) {
        self.active_tab = index;
        tracing::debug!("活动标签页: {}", SHEET_TABS[index]);
    }

    /// 新建标签页按钮：当前只记录触发
    pub fn request_new_tab(&mut self) {
        tracing::info!("Add new tab");
        self.message = Some("Add new tab".to_string());
    }

    // ============ 滚动与悬停 ============

    /// 滚轮滚动表体，与选区相互独立
    pub fn scroll_body(&mut self, delta: i32) {
        // List 渲染时会改写偏移让选中项保持可见，滚轮接管偏移前先解除
        self.body_state.select(None);
        let max = self.display_rows.len().saturating_sub(1) as i32;
        let offset = (self.body_state.offset() as i32 + delta).clamp(0, max);
        *self.body_state.offset_mut() = offset as usize;
    }
}
