//! App 状态定义 (Model)
//!
//! 表格文档之外的全部短暂 UI 状态：选中单元格、排序指令、
//! 列宽拖拽会话、悬停行、活动标签页、状态栏消息

use ratatui::layout::Rect;
use ratatui::widgets::ListState;

use crate::grid::{self, ColumnSpan, ResizeDrag};
use crate::models::{ColumnSpec, Record, Sheet};

/// 底部标签页
pub const SHEET_TABS: [&str; 4] = ["All Orders", "Pending", "Reviewed", "Arrived"];

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

/// 当前排序指令；只记录状态，不改变行序
#[derive(Debug, Clone, PartialEq)]
pub struct SortState {
    pub key: String,
    pub order: SortOrder,
}

/// 渲染后缓存的各屏幕区域，供鼠标命中测试使用
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenChunks {
    pub header: Rect,
    pub toolbar: Rect,
    pub bands: Rect,
    pub letters: Rect,
    pub labels: Rect,
    pub body: Rect,
    pub tabs: Rect,
    pub footer: Rect,
}

/// 应用状态
pub struct App {
    pub sheet: Sheet,
    pub display_rows: Vec<Record>, // 真实记录 + 填充行
    pub selected: Option<(usize, usize)>, // (display row, visible column)
    pub sort: Option<SortState>,
    pub resize: Option<ResizeDrag>,
    pub hovered_row: Option<usize>,
    pub active_tab: usize,
    pub message: Option<String>,
    pub chunks: ScreenChunks,
    pub body_state: ListState,
}

impl App {
    /// 创建新的应用实例；显示行只在此处计算一次
    pub fn new(sheet: Sheet) -> Self {
        let display_rows = grid::pad_rows(&sheet.rows);
        Self {
            sheet,
            display_rows,
            selected: None,
            sort: None,
            resize: None,
            hovered_row: None,
            active_tab: 0,
            message: None,
            chunks: ScreenChunks::default(),
            body_state: ListState::default(),
        }
    }

    /// 可见列（显示顺序）
    pub fn visible_columns(&self) -> Vec<&ColumnSpec> {
        self.sheet.columns.iter().filter(|c| c.visible).collect()
    }

    /// 当前可见列在屏幕上的水平区间
    pub fn column_spans(&self) -> Vec<ColumnSpan> {
        let origin = self.chunks.body.x + grid::ROW_INDEX_WIDTH;
        grid::column_spans(origin, &self.visible_columns())
    }

    /// 指定显示行是否为空（填充行或全空记录）
    pub fn row_is_empty(&self, row: usize) -> bool {
        self.display_rows.get(row).is_none_or(|r| r.is_empty())
    }
}
