// Recent task domain model

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Completed,
    InProgress,
    Pending,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "completed",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Pending => "pending",
        }
    }

    /// Badge text: the status name with underscores shown as spaces.
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }

    pub fn badge_classes(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "bg-green-100 text-green-800",
            TaskStatus::InProgress => "bg-blue-100 text-blue-800",
            TaskStatus::Pending => "bg-gray-100 text-gray-800",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecentTask {
    pub id: &'static str,
    pub title: &'static str,
    pub agent: &'static str,
    pub status: TaskStatus,
    pub timestamp: &'static str,
}

pub static RECENT_TASKS: [RecentTask; 3] = [
    RecentTask {
        id: "1",
        title: "Generate trending content",
        agent: "Agent Alpha",
        status: TaskStatus::Completed,
        timestamp: "2 min ago",
    },
    RecentTask {
        id: "2",
        title: "Analyze market trends",
        agent: "Agent Beta",
        status: TaskStatus::InProgress,
        timestamp: "5 min ago",
    },
    RecentTask {
        id: "3",
        title: "Publish to social media",
        agent: "Agent Gamma",
        status: TaskStatus::Pending,
        timestamp: "10 min ago",
    },
];
