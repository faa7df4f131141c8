// Placeholder page definitions

/// A routed view that only carries static descriptive text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderPage {
    pub path: &'static str,
    pub heading: &'static str,
    pub summary: &'static str,
    pub features: &'static str,
}

pub static PLACEHOLDER_PAGES: [PlaceholderPage; 5] = [
    PlaceholderPage {
        path: "/agents",
        heading: "Agent Management",
        summary: "Agent management interface will be implemented here.",
        features: "Features: Agent creation, persona management, performance monitoring",
    },
    PlaceholderPage {
        path: "/tasks",
        heading: "Task Management",
        summary: "Task management interface will be implemented here.",
        features: "Features: Task queue, priority management, status tracking",
    },
    PlaceholderPage {
        path: "/content",
        heading: "Content Management",
        summary: "Content management interface will be implemented here.",
        features: "Features: Content creation, moderation, publishing, analytics",
    },
    PlaceholderPage {
        path: "/trends",
        heading: "Trend Analysis",
        summary: "Trend analysis interface will be implemented here.",
        features: "Features: Trend detection, relevance scoring, market insights",
    },
    PlaceholderPage {
        path: "/security",
        heading: "Security & Compliance",
        summary: "Security management interface will be implemented here.",
        features: "Features: Authentication, authorization, audit logs, compliance monitoring",
    },
];
