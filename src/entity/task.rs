// src/entity/task.rs
use serde::{Deserialize, Serialize};

use super::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "접수")]
    Received,
    #[serde(rename = "진행중")]
    InProgress,
    #[serde(rename = "대기중")]
    Waiting,
    #[serde(rename = "완료")]
    Done,
    #[serde(rename = "미해결완료")]
    ClosedUnresolved,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 5] = [
        TaskStatus::Received,
        TaskStatus::InProgress,
        TaskStatus::Waiting,
        TaskStatus::Done,
        TaskStatus::ClosedUnresolved,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Received => "접수",
            TaskStatus::InProgress => "진행중",
            TaskStatus::Waiting => "대기중",
            TaskStatus::Done => "완료",
            TaskStatus::ClosedUnresolved => "미해결완료",
        }
    }

    /// Closed statuses are rendered muted. Nothing prevents reopening them.
    pub fn is_closed(&self) -> bool {
        matches!(self, TaskStatus::Done | TaskStatus::ClosedUnresolved)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "접수" | "received" => Ok(TaskStatus::Received),
            "진행중" | "in_progress" | "inprogress" => Ok(TaskStatus::InProgress),
            "대기중" | "waiting" => Ok(TaskStatus::Waiting),
            "완료" | "done" => Ok(TaskStatus::Done),
            "미해결완료" | "unresolved" | "closed_unresolved" => Ok(TaskStatus::ClosedUnresolved),
            _ => Err(format!("Invalid task status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Importance {
    #[serde(rename = "루틴")]
    Routine,
    #[serde(rename = "긴급")]
    Urgent,
    #[serde(rename = "높음")]
    High,
    #[default]
    #[serde(rename = "보통")]
    Normal,
    #[serde(rename = "낮음")]
    Low,
    #[serde(rename = "보류")]
    OnHold,
}

impl Importance {
    pub const ALL: [Importance; 6] = [
        Importance::Routine,
        Importance::Urgent,
        Importance::High,
        Importance::Normal,
        Importance::Low,
        Importance::OnHold,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Importance::Routine => "루틴",
            Importance::Urgent => "긴급",
            Importance::High => "높음",
            Importance::Normal => "보통",
            Importance::Low => "낮음",
            Importance::OnHold => "보류",
        }
    }
}

impl std::fmt::Display for Importance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Importance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "루틴" | "routine" => Ok(Importance::Routine),
            "긴급" | "urgent" => Ok(Importance::Urgent),
            "높음" | "high" => Ok(Importance::High),
            "보통" | "normal" => Ok(Importance::Normal),
            "낮음" | "low" => Ok(Importance::Low),
            "보류" | "on_hold" | "hold" => Ok(Importance::OnHold),
            _ => Err(format!("Invalid importance: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: EntityId,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub importance: Importance,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub content: String,
    /// Free-form deadline label such as "D-3" or "3/15".
    #[serde(rename = "dDay", default)]
    pub d_day: String,
}

impl Task {
    pub fn new(id: EntityId, category: impl Into<String>) -> Self {
        Self {
            id,
            title: String::new(),
            category: category.into(),
            importance: Importance::default(),
            status: TaskStatus::default(),
            content: String::new(),
            d_day: String::new(),
        }
    }

    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new(7, "업무");
        assert_eq!(task.id, 7);
        assert_eq!(task.category, "업무");
        assert_eq!(task.importance, Importance::Normal);
        assert_eq!(task.status, TaskStatus::Received);
        assert!(task.title.is_empty());
        assert!(!task.has_title());
    }

    #[test]
    fn test_whitespace_title_is_not_a_title() {
        let mut task = Task::new(1, "업무");
        task.title = "  \t ".to_string();
        assert!(!task.has_title());
        task.title = " 보고서 ".to_string();
        assert!(task.has_title());
    }

    #[test]
    fn test_json_field_names() {
        let mut task = Task::new(1700000000000, "개인");
        task.title = "운동".to_string();
        task.d_day = "D-3".to_string();
        task.status = TaskStatus::InProgress;

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["id"], 1700000000000i64);
        assert_eq!(json["dDay"], "D-3");
        assert_eq!(json["status"], "진행중");
        assert_eq!(json["importance"], "보통");
        assert!(json.get("d_day").is_none());
    }

    #[test]
    fn test_deserialize_stored_task() {
        let raw = r#"{"id":1,"title":"보고서 작성","category":"업무","importance":"긴급","status":"미해결완료","content":"","dDay":""}"#;
        let task: Task = serde_json::from_str(raw).unwrap();
        assert_eq!(task.importance, Importance::Urgent);
        assert_eq!(task.status, TaskStatus::ClosedUnresolved);
        assert!(task.status.is_closed());
    }

    #[test]
    fn test_status_from_str_accepts_labels_and_aliases() {
        assert_eq!("진행중".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
        assert_eq!("in-progress".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
        assert_eq!("Done".parse::<TaskStatus>().unwrap(), TaskStatus::Done);
        assert!("finished".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_importance_from_str() {
        assert_eq!("보류".parse::<Importance>().unwrap(), Importance::OnHold);
        assert_eq!("urgent".parse::<Importance>().unwrap(), Importance::Urgent);
        assert!("critical".parse::<Importance>().is_err());
    }

    #[test]
    fn test_display_matches_label() {
        for status in TaskStatus::ALL {
            assert_eq!(status.to_string(), status.label());
        }
        for importance in Importance::ALL {
            assert_eq!(importance.to_string(), importance.label());
        }
    }
}
