use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::grid::MIN_COLUMN_WIDTH;
use crate::models::Sheet;

/// 从 TOML 文件加载表格
pub fn load_sheet(path: &Path) -> Result<Sheet> {
    let content =
        fs::read_to_string(path).with_context(|| format!("无法读取 {}", path.display()))?;
    let mut sheet: Sheet =
        toml::from_str(&content).with_context(|| format!("无法解析 {}", path.display()))?;

    validate(&sheet)?;

    // 低于下限的列宽一律抬到下限
    for col in &mut sheet.columns {
        col.width = col.width.max(MIN_COLUMN_WIDTH);
    }

    tracing::info!(
        "已加载 {}: {} 条记录, {} 列",
        path.display(),
        sheet.rows.len(),
        sheet.columns.len()
    );
    Ok(sheet)
}

/// 基本校验：列 key 与记录 id 不得重复
fn validate(sheet: &Sheet) -> Result<()> {
    let mut keys = HashSet::new();
    for col in &sheet.columns {
        if !keys.insert(col.key.as_str()) {
            bail!("列 key 重复: {}", col.key);
        }
    }

    let mut ids = HashSet::new();
    for row in &sheet.rows {
        if !ids.insert(row.id) {
            bail!("记录 id 重复: {}", row.id);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r#"
[meta]
name = "Mini"
version = "1.0"
created_at = "2024-11-15T10:00:00+05:30"

[[columns]]
key = "job_request"
label = "Job Request"
width = 300

[[columns]]
key = "status"
label = "Status"
width = 130
sortable = false

[[rows]]
id = 1
job_request = "Ship the press kit"
status = "In-progress"
"#;

    fn write_sheet(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_sheet() {
        let file = write_sheet(MINIMAL);
        let sheet = load_sheet(file.path()).unwrap();

        assert_eq!(sheet.meta.name, "Mini");
        assert_eq!(sheet.columns.len(), 2);
        // 省略的字段取默认值
        assert!(sheet.columns[0].visible);
        assert!(sheet.columns[0].sortable);
        assert!(!sheet.columns[1].sortable);
        assert_eq!(sheet.rows.len(), 1);
        assert_eq!(sheet.rows[0].field("status"), Some("In-progress"));
        assert_eq!(sheet.rows[0].field("date"), Some(""));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_sheet(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn test_width_floor_applied() {
        let file = write_sheet(
            r#"
[[columns]]
key = "date"
label = "Date"
width = 40
"#,
        );
        let sheet = load_sheet(file.path()).unwrap();
        assert_eq!(sheet.columns[0].width, 100);
    }

    #[test]
    fn test_duplicate_column_key_rejected() {
        let file = write_sheet(
            r#"
[[columns]]
key = "date"
label = "Date"
width = 120

[[columns]]
key = "date"
label = "Due Date"
width = 120
"#,
        );
        assert!(load_sheet(file.path()).is_err());
    }

    #[test]
    fn test_duplicate_row_id_rejected() {
        let file = write_sheet(
            r#"
[[columns]]
key = "date"
label = "Date"
width = 120

[[rows]]
id = 3
date = "15-11-2024"

[[rows]]
id = 3
date = "16-11-2024"
"#,
        );
        assert!(load_sheet(file.path()).is_err());
    }
}
