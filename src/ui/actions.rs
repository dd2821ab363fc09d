//! Action 枚举定义 (Intent)
//!
//! 键盘与鼠标交互转化为明确的语义化 Action

/// 工具栏触发器；没有真实操作，只留诊断日志与状态栏提示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    ToolBar,
    HideFields,
    Sort,
    Filter,
    CellView,
    Import,
    Export,
    Share,
    NewAction,
}

impl ToolbarAction {
    pub const ALL: [ToolbarAction; 9] = [
        Self::ToolBar,
        Self::HideFields,
        Self::Sort,
        Self::Filter,
        Self::CellView,
        Self::Import,
        Self::Export,
        Self::Share,
        Self::NewAction,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ToolBar => "Tool Bar",
            Self::HideFields => "Hide Fields",
            Self::Sort => "Sort",
            Self::Filter => "Filter",
            Self::CellView => "Cell View",
            Self::Import => "Import",
            Self::Export => "Export",
            Self::Share => "Share",
            Self::NewAction => "New Action",
        }
    }
}

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,

    // 选区
    MoveSelectionUp,
    MoveSelectionDown,
    MoveSelectionLeft,
    MoveSelectionRight,
    SelectCell(usize, usize), // (display row, visible column)

    // 表头
    SortBy(usize), // 可见列索引
    ResizeStart { col: usize, x: u16 },
    ResizeMove { x: u16 },
    ResizeEnd,

    // 周边交互
    Toolbar(ToolbarAction),
    NextTab,
    PrevTab,
    SelectTab(usize),
    AddTab,
    HoverRow(Option<usize>),
    ScrollUp,
    ScrollDown,
}
