use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// 状态徽章的封闭枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    NeedToStart,
    Complete,
    Blocked,
}

impl Status {
    /// 从单元格原始值解析；无法识别返回 None，渲染为空白
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "In-progress" => Some(Self::InProgress),
            "Need to start" => Some(Self::NeedToStart),
            "Complete" => Some(Self::Complete),
            "Blocked" => Some(Self::Blocked),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::InProgress => "In-progress",
            Self::NeedToStart => "Need to start",
            Self::Complete => "Complete",
            Self::Blocked => "Blocked",
        }
    }
}

/// 优先级徽章的封闭枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// 同 Status::parse，无法识别返回 None
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "High" => Some(Self::High),
            "Medium" => Some(Self::Medium),
            "Low" => Some(Self::Low),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// 一条表格记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    #[serde(default)]
    pub job_request: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub submitter: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub assignee: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub est_value: String,
}

impl Record {
    /// 构造填充行：id 续接序列，其余字段全空
    pub fn padding(id: u32) -> Self {
        Self {
            id,
            job_request: String::new(),
            date: String::new(),
            status: String::new(),
            submitter: String::new(),
            url: String::new(),
            assignee: String::new(),
            priority: String::new(),
            due_date: String::new(),
            est_value: String::new(),
        }
    }

    /// 除 id 外全部字段为空即视为空行，空行不参与选中与悬停
    pub fn is_empty(&self) -> bool {
        self.job_request.is_empty()
            && self.date.is_empty()
            && self.status.is_empty()
            && self.submitter.is_empty()
            && self.url.is_empty()
            && self.assignee.is_empty()
            && self.priority.is_empty()
            && self.due_date.is_empty()
            && self.est_value.is_empty()
    }

    /// 按列 key 取字段值；未知 key 返回 None，渲染为空白
    pub fn field(&self, key: &str) -> Option<&str> {
        match key {
            "job_request" => Some(&self.job_request),
            "date" => Some(&self.date),
            "status" => Some(&self.status),
            "submitter" => Some(&self.submitter),
            "url" => Some(&self.url),
            "assignee" => Some(&self.assignee),
            "priority" => Some(&self.priority),
            "due_date" => Some(&self.due_date),
            "est_value" => Some(&self.est_value),
            _ => None,
        }
    }
}

/// 列描述符
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub key: String,
    pub label: String,
    pub width: u16, // 像素宽度，下限 100
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default = "default_true")]
    pub sortable: bool,
}

fn default_true() -> bool {
    true
}

impl ColumnSpec {
    pub fn new(key: &str, label: &str, width: u16, sortable: bool) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            width,
            visible: true,
            sortable,
        }
    }
}

/// 分区条：跨越若干可见列的纯展示性分组标签
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionBand {
    pub label: String,
    pub span: usize,
    #[serde(default = "default_band_color")]
    pub color: String,
}

fn default_band_color() -> String {
    "gray".to_string()
}

/// 表格元信息；字段均可省略
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetMeta {
    #[serde(default = "default_sheet_name")]
    pub name: String,
    #[serde(default = "default_sheet_version")]
    pub version: String,
    #[serde(default = "Local::now")]
    pub created_at: DateTime<Local>,
}

fn default_sheet_name() -> String {
    "Untitled".to_string()
}

fn default_sheet_version() -> String {
    "1.0".to_string()
}

impl Default for SheetMeta {
    fn default() -> Self {
        Self {
            name: default_sheet_name(),
            version: default_sheet_version(),
            created_at: Local::now(),
        }
    }
}

/// 完整表格文档，同时也是 TOML 文件结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sheet {
    #[serde(default)]
    pub meta: SheetMeta,
    pub columns: Vec<ColumnSpec>,
    #[serde(default)]
    pub bands: Vec<SectionBand>,
    #[serde(default)]
    pub rows: Vec<Record>,
}

impl Sheet {
    /// 应用列宽变更通知；宽度是挂载后唯一可变的字段
    pub fn set_column_width(&mut self, key: &str, width: u16) {
        if let Some(col) = self.columns.iter_mut().find(|c| c.key == key) {
            col.width = width;
        }
    }

    /// 内置示例数据，未指定文件时的默认表格
    pub fn sample() -> Self {
        Self {
            meta: SheetMeta {
                name: "Spreadsheet 3".to_string(),
                version: "1.0".to_string(),
                created_at: Local::now(),
            },
            columns: vec![
                ColumnSpec::new("job_request", "Job Request", 300, true),
                ColumnSpec::new("date", "Date", 120, true),
                ColumnSpec::new("status", "Status", 130, true),
                ColumnSpec::new("submitter", "Submitter", 150, true),
                ColumnSpec::new("url", "URL", 180, false),
                ColumnSpec::new("assignee", "Assignee", 150, true),
                ColumnSpec::new("priority", "Priority", 100, true),
                ColumnSpec::new("due_date", "Due Date", 120, true),
                ColumnSpec::new("est_value", "Est. Value", 140, true),
            ],
            bands: vec![
                SectionBand {
                    label: "Q3 Financial Overview".to_string(),
                    span: 5,
                    color: "blue".to_string(),
                },
                SectionBand {
                    label: "ABC".to_string(),
                    span: 1,
                    color: "green".to_string(),
                },
                SectionBand {
                    label: "Answer a question".to_string(),
                    span: 2,
                    color: "magenta".to_string(),
                },
                SectionBand {
                    label: "Extract".to_string(),
                    span: 1,
                    color: "yellow".to_string(),
                },
            ],
            rows: vec![
                Record {
                    id: 1,
                    job_request: "Launch social media campaign for product promotion".to_string(),
                    date: "15-11-2024".to_string(),
                    status: "In-progress".to_string(),
                    submitter: "Aloha Patel".to_string(),
                    url: "www.alohapatel.com".to_string(),
                    assignee: "Sophie Choudhury".to_string(),
                    priority: "Medium".to_string(),
                    due_date: "20-11-2024".to_string(),
                    est_value: "6,200,000 ₹".to_string(),
                },
                Record {
                    id: 2,
                    job_request: "Update press kit for company redesign".to_string(),
                    date: "28-10-2024".to_string(),
                    status: "Need to start".to_string(),
                    submitter: "Irfan Khan".to_string(),
                    url: "www.irfankhan.pk".to_string(),
                    assignee: "Tejas Pandey".to_string(),
                    priority: "High".to_string(),
                    due_date: "30-10-2024".to_string(),
                    est_value: "3,500,000 ₹".to_string(),
                },
                Record {
                    id: 3,
                    job_request: "Finalize user testing feedback for app redesign".to_string(),
                    date: "05-12-2024".to_string(),
                    status: "In-progress".to_string(),
                    submitter: "Mark Johnson".to_string(),
                    url: "www.markjohnso.com".to_string(),
                    assignee: "Rachel Lee".to_string(),
                    priority: "Medium".to_string(),
                    due_date: "10-12-2024".to_string(),
                    est_value: "4,750,000 ₹".to_string(),
                },
                Record {
                    id: 4,
                    job_request: "Design new features for the website".to_string(),
                    date: "10-01-2025".to_string(),
                    status: "Complete".to_string(),
                    submitter: "Emily Green".to_string(),
                    url: "www.emilygreen.co".to_string(),
                    assignee: "Tom Wright".to_string(),
                    priority: "Low".to_string(),
                    due_date: "15-01-2025".to_string(),
                    est_value: "5,800,000 ₹".to_string(),
                },
                Record {
                    id: 5,
                    job_request: "Prepare financial report for Q4".to_string(),
                    date: "25-01-2025".to_string(),
                    status: "Blocked".to_string(),
                    submitter: "Jessica Brown".to_string(),
                    url: "www.jessicabro.wn".to_string(),
                    assignee: "Kevin Smith".to_string(),
                    priority: "Low".to_string(),
                    due_date: "30-01-2025".to_string(),
                    est_value: "2,800,000 ₹".to_string(),
                },
            ],
        }
    }
}
