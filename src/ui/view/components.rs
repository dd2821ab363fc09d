//! 通用 UI 组件
//!
//! 单元格内容与徽章样式、文本对齐裁剪、工具栏与标签栏的区间几何

use ratatui::style::{Color, Modifier, Style};

use crate::models::{Priority, Record, Status};
use crate::ui::actions::ToolbarAction;
use crate::ui::state::SHEET_TABS;

/// 超过 30 字符的链接截断展示
const URL_DISPLAY_LIMIT: usize = 30;

// ============ 文本对齐与裁剪 ============

/// [组件] 左对齐填充到固定宽度，超出部分截断
pub fn fit(text: &str, width: u16) -> String {
    let width = width as usize;
    let mut out: String = text.chars().take(width).collect();
    let used = out.chars().count();
    out.push_str(&" ".repeat(width - used));
    out
}

/// [组件] 居中填充到固定宽度
pub fn fit_center(text: &str, width: u16) -> String {
    let width = width as usize;
    let out: String = text.chars().take(width).collect();
    let used = out.chars().count();
    let left = (width - used) / 2;
    format!("{}{}{}", " ".repeat(left), out, " ".repeat(width - used - left))
}

/// [组件] 链接文本：超过 30 字符取前 30 字符加省略号
pub fn truncate_url(url: &str) -> String {
    if url.chars().count() > URL_DISPLAY_LIMIT {
        let prefix: String = url.chars().take(URL_DISPLAY_LIMIT).collect();
        format!("{}...", prefix)
    } else {
        url.to_string()
    }
}

// ============ 单元格内容 ============

/// [组件] 按列 key 多态渲染单元格：返回展示文本与样式
///
/// status/priority 走封闭枚举的徽章样式，文本取枚举的规范标签，
/// 无法识别的值渲染为空白；url 截断并加下划线；其余列原样展示。
/// 未知 key 渲染为空白。
pub fn cell_content(record: &Record, key: &str) -> (String, Style) {
    let Some(value) = record.field(key) else {
        return (String::new(), Style::default());
    };
    match key {
        "status" => match Status::parse(value) {
            Some(status) => (status.label().to_string(), status_style(status)),
            None => (String::new(), Style::default()),
        },
        "priority" => match Priority::parse(value) {
            Some(priority) => (priority.label().to_string(), priority_style(priority)),
            None => (String::new(), Style::default()),
        },
        "url" => (
            truncate_url(value),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        ),
        _ => (value.to_string(), Style::default()),
    }
}

/// 状态徽章：黑字配色块底
pub fn status_style(status: Status) -> Style {
    let bg = match status {
        Status::Complete => Color::Green,
        Status::InProgress => Color::Yellow,
        Status::NeedToStart => Color::Blue,
        Status::Blocked => Color::Red,
    };
    Style::default().fg(Color::Black).bg(bg)
}

/// 优先级徽章：彩色加粗文字
pub fn priority_style(priority: Priority) -> Style {
    let fg = match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Blue,
    };
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}

/// 分组带的配色名转终端颜色；认不出的名字给暗灰
pub fn band_color(name: &str) -> Color {
    match name {
        "blue" => Color::Blue,
        "green" => Color::Green,
        "purple" => Color::Magenta,
        "orange" => Color::LightRed,
        "gray" => Color::DarkGray,
        _ => name.parse().unwrap_or(Color::DarkGray),
    }
}

// ============ 工具栏与标签栏的区间几何 ============

/// 工具栏、标签栏里一个可点击项的水平区间
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipSpan {
    pub x: u16,
    pub width: u16,
}

impl ChipSpan {
    pub fn contains(&self, x: u16) -> bool {
        x >= self.x && x < self.x + self.width
    }
}

/// 工具栏各触发器的区间：标签两侧各留一格，项与项之间一格分隔线
pub fn toolbar_spans(origin: u16) -> Vec<(ToolbarAction, ChipSpan)> {
    let mut spans = Vec::with_capacity(ToolbarAction::ALL.len());
    let mut x = origin;
    for trigger in ToolbarAction::ALL {
        let width = trigger.label().len() as u16 + 2;
        spans.push((trigger, ChipSpan { x, width }));
        x += width + 1;
    }
    spans
}

/// 标签页区间，末位附宽 3 的 "+" 按钮
pub fn tab_spans(origin: u16) -> Vec<ChipSpan> {
    let mut spans = Vec::with_capacity(SHEET_TABS.len() + 1);
    let mut x = origin;
    for tab in SHEET_TABS {
        let width = tab.len() as u16 + 2;
        spans.push(ChipSpan { x, width });
        x += width + 1;
    }
    spans.push(ChipSpan { x, width: 3 });
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_url_long_value() {
        let url = "www.alohapatelwithextralongname.com.extra"; // 41 字符
        let shown = truncate_url(url);
        assert_eq!(shown.chars().count(), 33);
        assert!(shown.ends_with("..."));
        assert!(shown.starts_with("www.alohapatelwithextralongnam"));
    }

    #[test]
    fn test_truncate_url_short_value() {
        assert_eq!(truncate_url("www.alohapatel.com"), "www.alohapatel.com");
    }

    #[test]
    fn test_truncate_url_exact_limit_unmodified() {
        let url = "a".repeat(30);
        assert_eq!(truncate_url(&url), url);
    }

    #[test]
    fn test_fit_pads_and_truncates() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 4), "abcd");
        assert_eq!(fit("", 3), "   ");
    }

    #[test]
    fn test_fit_center_balances_padding() {
        assert_eq!(fit_center("ab", 6), "  ab  ");
        assert_eq!(fit_center("abc", 6), " abc  ");
        assert_eq!(fit_center("abcdef", 4), "abcd");
    }

    #[test]
    fn test_status_cell_uses_badge_style() {
        let mut record = Record::padding(1);
        record.status = "Complete".to_string();
        let (text, style) = cell_content(&record, "status");
        assert_eq!(text, "Complete");
        assert_eq!(style.bg, Some(Color::Green));

        // 闭集之外渲染为空白
        record.status = "Started".to_string();
        let (text, style) = cell_content(&record, "status");
        assert_eq!(text, "");
        assert_eq!(style, Style::default());
    }

    #[test]
    fn test_priority_cell_uses_badge_style() {
        let mut record = Record::padding(1);
        record.priority = "High".to_string();
        let (text, style) = cell_content(&record, "priority");
        assert_eq!(text, "High");
        assert_eq!(style.fg, Some(Color::Red));

        record.priority = "Urgent".to_string();
        let (text, _) = cell_content(&record, "priority");
        assert_eq!(text, "");
    }

    #[test]
    fn test_url_cell_styled_as_link() {
        let mut record = Record::padding(1);
        record.url = "www.alohapatelwithextralongname.com.extra".to_string();
        let (text, style) = cell_content(&record, "url");
        assert!(text.ends_with("..."));
        assert_eq!(style.fg, Some(Color::Blue));
        assert!(style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_unknown_key_renders_nothing() {
        let record = Record::padding(1);
        let (text, style) = cell_content(&record, "nonexistent");
        assert_eq!(text, "");
        assert_eq!(style, Style::default());
    }

    #[test]
    fn test_padding_row_renders_nothing() {
        let record = Record::padding(7);
        for key in ["job_request", "status", "priority", "url", "est_value"] {
            let (text, _) = cell_content(&record, key);
            assert_eq!(text, "", "{key} 应为空");
        }
    }

    #[test]
    fn test_band_color_names() {
        assert_eq!(band_color("blue"), Color::Blue);
        assert_eq!(band_color("purple"), Color::Magenta);
        assert_eq!(band_color("no-such-color"), Color::DarkGray);
    }

    #[test]
    fn test_toolbar_spans_geometry() {
        let spans = toolbar_spans(0);
        assert_eq!(spans.len(), 9);
        assert_eq!(spans[0].0, ToolbarAction::ToolBar);
        // "Tool Bar" 8 字符 + 两侧空格
        assert_eq!(spans[0].1, ChipSpan { x: 0, width: 10 });
        assert_eq!(spans[1].1, ChipSpan { x: 11, width: 13 });

        // 区间互不重叠
        for pair in spans.windows(2) {
            assert!(pair[0].1.x + pair[0].1.width < pair[1].1.x + 1);
        }
    }

    #[test]
    fn test_tab_spans_geometry() {
        let spans = tab_spans(0);
        assert_eq!(spans.len(), SHEET_TABS.len() + 1);
        assert_eq!(spans[0], ChipSpan { x: 0, width: 12 });
        assert_eq!(spans[1], ChipSpan { x: 13, width: 9 });
        // 末位 "+"
        assert_eq!(spans[4], ChipSpan { x: 44, width: 3 });
    }

    #[test]
    fn test_chip_span_contains_bounds() {
        let span = ChipSpan { x: 5, width: 4 };
        assert!(!span.contains(4));
        assert!(span.contains(5));
        assert!(span.contains(8));
        assert!(!span.contains(9));
    }
}
