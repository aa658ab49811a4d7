use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Translation key for the priority label
    pub fn label_key(self) -> &'static str {
        match self {
            Priority::Low => "tasks.priority.low",
            Priority::Medium => "tasks.priority.medium",
            Priority::High => "tasks.priority.high",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Priority::Low => "#94a3b8",
            Priority::Medium => "#4A9FD8",
            Priority::High => "#ef4444",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Priority::Low => Priority::High,
            Priority::Medium => Priority::Low,
            Priority::High => Priority::Medium,
        }
    }
}

/// In-memory, uncommitted task record edited by the creation modal
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due: Option<NaiveDateTime>,
    pub priority: Priority,
    pub reminder: bool,
}

impl TaskDraft {
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

/// A task held by the organizer after creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub due: Option<NaiveDateTime>,
    pub priority: Priority,
    pub reminder: bool,
    pub done: bool,
}

impl Task {
    pub fn from_draft(id: u64, draft: TaskDraft) -> Self {
        let description = Some(draft.description.trim().to_string()).filter(|d| !d.is_empty());
        Self {
            id,
            title: draft.title.trim().to_string(),
            description,
            due: draft.due,
            priority: draft.priority,
            reminder: draft.reminder,
            done: false,
        }
    }
}

/// Data collected by the onboarding screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingData {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_defaults() {
        let draft = TaskDraft::default();
        assert_eq!(draft.priority, Priority::Medium);
        assert!(!draft.reminder);
        assert!(draft.due.is_none());
        assert!(!draft.is_submittable());
    }

    #[test]
    fn whitespace_title_is_not_submittable() {
        let draft = TaskDraft {
            title: "  ".to_string(),
            ..TaskDraft::default()
        };
        assert!(!draft.is_submittable());
    }

    #[test]
    fn task_from_draft_drops_blank_description() {
        let draft = TaskDraft {
            title: " Buy milk ".to_string(),
            description: "   ".to_string(),
            ..TaskDraft::default()
        };
        let task = Task::from_draft(7, draft);
        assert_eq!(task.id, 7);
        assert_eq!(task.title, "Buy milk");
        assert!(task.description.is_none());
        assert!(!task.done);
    }

    #[test]
    fn priority_cycles() {
        assert_eq!(Priority::High.next(), Priority::Low);
        assert_eq!(Priority::Low.prev(), Priority::High);
        assert_eq!(
            serde_json::to_string(&Priority::Medium).unwrap(),
            "\"medium\""
        );
    }
}
