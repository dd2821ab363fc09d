//! 屏幕布局划分

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::ui::state::ScreenChunks;

/// 整屏纵向切成固定的八段
pub fn screen_chunks(area: Rect) -> ScreenChunks {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 页眉（面包屑与搜索）
            Constraint::Length(1), // 工具栏
            Constraint::Length(1), // 分组带
            Constraint::Length(1), // 字母行
            Constraint::Length(1), // 列名行
            Constraint::Min(5),    // 表体
            Constraint::Length(1), // 标签栏
            Constraint::Length(3), // 页脚
        ])
        .split(area);

    ScreenChunks {
        header: chunks[0],
        toolbar: chunks[1],
        bands: chunks[2],
        letters: chunks[3],
        labels: chunks[4],
        body: chunks[5],
        tabs: chunks[6],
        footer: chunks[7],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_chunks_vertical_order() {
        let chunks = screen_chunks(Rect::new(0, 0, 150, 40));

        assert_eq!(chunks.header, Rect::new(0, 0, 150, 3));
        assert_eq!(chunks.toolbar, Rect::new(0, 3, 150, 1));
        assert_eq!(chunks.bands, Rect::new(0, 4, 150, 1));
        assert_eq!(chunks.letters, Rect::new(0, 5, 150, 1));
        assert_eq!(chunks.labels, Rect::new(0, 6, 150, 1));
        // 表体吃掉剩余高度
        assert_eq!(chunks.body, Rect::new(0, 7, 150, 29));
        assert_eq!(chunks.tabs, Rect::new(0, 36, 150, 1));
        assert_eq!(chunks.footer, Rect::new(0, 37, 150, 3));
    }

    #[test]
    fn test_screen_chunks_small_terminal() {
        // 高度不足时各段仍按声明顺序排布，表体保住最小高度
        let chunks = screen_chunks(Rect::new(0, 0, 80, 16));
        assert_eq!(chunks.body.height, 5);
        assert!(chunks.labels.y < chunks.body.y);
        assert!(chunks.body.y < chunks.tabs.y);
    }
}
