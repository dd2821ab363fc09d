//! 网格布局与交互的纯逻辑
//!
//! 行填充、列字母标号、像素与终端列的换算、
//! 列区间几何与命中测试、列宽拖拽会话

use crate::models::{ColumnSpec, Record};

/// 列宽下限（像素）
pub const MIN_COLUMN_WIDTH: u16 = 100;
/// 显示行数下限
pub const MIN_DISPLAY_ROWS: usize = 25;
/// 终端一列对应的像素数
pub const PX_PER_CELL: u16 = 10;
/// 行号栏宽度（终端列）
pub const ROW_INDEX_WIDTH: u16 = 4;

/// 0 基列索引转电子表格式字母标号（0→A, 25→Z, 26→AA）
pub fn column_letter(index: usize) -> String {
    let mut result = String::new();
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        result.insert(0, char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }
    result
}

/// 把真实记录补齐到下限行数；填充行 id 续接序列，其余字段全空
pub fn pad_rows(rows: &[Record]) -> Vec<Record> {
    let mut display = rows.to_vec();
    for i in rows.len()..MIN_DISPLAY_ROWS.max(rows.len()) {
        display.push(Record::padding(i as u32 + 1));
    }
    display
}

/// 像素宽度换算为终端列数
pub fn width_cells(width_px: u16) -> u16 {
    (width_px / PX_PER_CELL).max(1)
}

/// 一个可见列占据的水平区间（绝对终端坐标）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub index: usize,
    pub x: u16,
    pub width: u16,
}

impl ColumnSpan {
    pub fn contains(&self, x: u16) -> bool {
        x >= self.x && x < self.x + self.width
    }

    /// 区间最右一格是拖拽手柄
    pub fn handle_x(&self) -> u16 {
        self.x + self.width - 1
    }
}

/// 依可见列顺序从 origin 起累加出各列区间
pub fn column_spans(origin: u16, columns: &[&ColumnSpec]) -> Vec<ColumnSpan> {
    let mut spans = Vec::with_capacity(columns.len());
    let mut x = origin;
    for (index, col) in columns.iter().enumerate() {
        let width = width_cells(col.width);
        spans.push(ColumnSpan { index, x, width });
        x += width;
    }
    spans
}

/// 命中测试结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnHit {
    Cell(usize),
    Handle(usize),
}

/// 表头行内的命中测试：落在手柄格上算拖拽，其余算列本体
pub fn hit_header(spans: &[ColumnSpan], x: u16) -> Option<ColumnHit> {
    spans.iter().find(|s| s.contains(x)).map(|s| {
        if x == s.handle_x() {
            ColumnHit::Handle(s.index)
        } else {
            ColumnHit::Cell(s.index)
        }
    })
}

/// 表体行内的命中测试：整个区间都算单元格
pub fn hit_cell(spans: &[ColumnSpan], x: u16) -> Option<usize> {
    spans.iter().find(|s| s.contains(x)).map(|s| s.index)
}

/// 列宽拖拽会话：按下手柄时捕获起点横坐标与起始宽度
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeDrag {
    pub key: String,
    pub start_x: u16,
    pub start_width: u16,
}

impl ResizeDrag {
    /// 指针移到 x 处时的新列宽：max(100, 起始宽度 + 横向位移对应的像素)
    pub fn width_at(&self, x: u16) -> u16 {
        let delta = (x as i32 - self.start_x as i32) * PX_PER_CELL as i32;
        (self.start_width as i32 + delta).clamp(MIN_COLUMN_WIDTH as i32, u16::MAX as i32) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, job: &str) -> Record {
        let mut r = Record::padding(id);
        r.job_request = job.to_string();
        r
    }

    #[test]
    fn test_column_letter_single_digit() {
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(1), "B");
        assert_eq!(column_letter(25), "Z");
    }

    #[test]
    fn test_column_letter_carries() {
        assert_eq!(column_letter(26), "AA");
        assert_eq!(column_letter(51), "AZ");
        assert_eq!(column_letter(52), "BA");
        assert_eq!(column_letter(701), "ZZ");
        assert_eq!(column_letter(702), "AAA");
    }

    #[test]
    fn test_pad_rows_below_minimum() {
        let rows: Vec<Record> = (1..=5).map(|i| record(i, "task")).collect();
        let display = pad_rows(&rows);

        assert_eq!(display.len(), 25);
        assert!(display[..5].iter().all(|r| !r.is_empty()));
        assert!(display[5..].iter().all(|r| r.is_empty()));
        // 填充行 id 续接序列
        assert_eq!(display[5].id, 6);
        assert_eq!(display[24].id, 25);
    }

    #[test]
    fn test_pad_rows_above_minimum() {
        let rows: Vec<Record> = (1..=30).map(|i| record(i, "task")).collect();
        let display = pad_rows(&rows);

        assert_eq!(display.len(), 30);
        assert!(display.iter().all(|r| !r.is_empty()));
    }

    #[test]
    fn test_pad_rows_no_records() {
        let display = pad_rows(&[]);
        assert_eq!(display.len(), 25);
        assert!(display.iter().all(|r| r.is_empty()));
        assert_eq!(display[0].id, 1);
    }

    #[test]
    fn test_width_cells_scaling() {
        assert_eq!(width_cells(300), 30);
        assert_eq!(width_cells(100), 10);
        assert_eq!(width_cells(105), 10);
        // 下限一格
        assert_eq!(width_cells(5), 1);
    }

    #[test]
    fn test_column_spans_accumulate() {
        let a = ColumnSpec::new("a", "A", 100, true);
        let b = ColumnSpec::new("b", "B", 200, true);
        let spans = column_spans(4, &[&a, &b]);

        assert_eq!(spans[0], ColumnSpan { index: 0, x: 4, width: 10 });
        assert_eq!(spans[1], ColumnSpan { index: 1, x: 14, width: 20 });
    }

    #[test]
    fn test_hit_header_cell_and_handle() {
        let a = ColumnSpec::new("a", "A", 100, true);
        let b = ColumnSpec::new("b", "B", 200, true);
        let spans = column_spans(0, &[&a, &b]);

        assert_eq!(hit_header(&spans, 0), Some(ColumnHit::Cell(0)));
        assert_eq!(hit_header(&spans, 9), Some(ColumnHit::Handle(0)));
        assert_eq!(hit_header(&spans, 10), Some(ColumnHit::Cell(1)));
        assert_eq!(hit_header(&spans, 29), Some(ColumnHit::Handle(1)));
        assert_eq!(hit_header(&spans, 30), None);
    }

    #[test]
    fn test_hit_cell_ignores_handles() {
        let a = ColumnSpec::new("a", "A", 100, true);
        let spans = column_spans(0, &[&a]);

        assert_eq!(hit_cell(&spans, 9), Some(0));
        assert_eq!(hit_cell(&spans, 10), None);
    }

    #[test]
    fn test_resize_clamps_to_minimum() {
        let drag = ResizeDrag {
            key: "date".to_string(),
            start_x: 50,
            start_width: 150,
        };
        // 左移 10 格 = -100 像素，150-100=50 被钳到 100
        assert_eq!(drag.width_at(40), 100);
        assert_eq!(drag.width_at(0), 100);
    }

    #[test]
    fn test_resize_tracks_displacement() {
        let drag = ResizeDrag {
            key: "date".to_string(),
            start_x: 50,
            start_width: 150,
        };
        assert_eq!(drag.width_at(50), 150);
        assert_eq!(drag.width_at(55), 200);
        assert_eq!(drag.width_at(46), 110);
    }
}
