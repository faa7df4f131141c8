// Sidebar navigation and icon set

/// Icons used across the shell, named after their lucide glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Home,
    Users,
    CheckSquare,
    FileText,
    TrendingUp,
    Shield,
    Activity,
    AlertCircle,
    DollarSign,
    CheckCircle,
    AlertTriangle,
    XCircle,
}

impl Icon {
    /// Name understood by the lucide icon script (`data-lucide` attribute).
    pub fn lucide_name(&self) -> &'static str {
        match self {
            Icon::Home => "home",
            Icon::Users => "users",
            Icon::CheckSquare => "check-square",
            Icon::FileText => "file-text",
            Icon::TrendingUp => "trending-up",
            Icon::Shield => "shield",
            Icon::Activity => "activity",
            Icon::AlertCircle => "alert-circle",
            Icon::DollarSign => "dollar-sign",
            Icon::CheckCircle => "check-circle",
            Icon::AlertTriangle => "alert-triangle",
            Icon::XCircle => "x-circle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationItem {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

pub static NAVIGATION: [NavigationItem; 6] = [
    NavigationItem { name: "Dashboard", href: "/", icon: Icon::Home },
    NavigationItem { name: "Agents", href: "/agents", icon: Icon::Users },
    NavigationItem { name: "Tasks", href: "/tasks", icon: Icon::CheckSquare },
    NavigationItem { name: "Content", href: "/content", icon: Icon::FileText },
    NavigationItem { name: "Trends", href: "/trends", icon: Icon::TrendingUp },
    NavigationItem { name: "Security", href: "/security", icon: Icon::Shield },
];

/// Title shown when the current path matches no navigation entry.
pub const FALLBACK_TITLE: &str = "Dashboard";

/// Navigation entry whose `href` equals `path` exactly.
pub fn active_item(path: &str) -> Option<&'static NavigationItem> {
    NAVIGATION.iter().find(|item| item.href == path)
}

/// Header title for `path`; unmatched paths read "Dashboard".
pub fn title_for(path: &str) -> &'static str {
    active_item(path).map(|item| item.name).unwrap_or(FALLBACK_TITLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_for_known_paths() {
        for item in &NAVIGATION {
            assert_eq!(title_for(item.href), item.name);
        }
    }

    #[test]
    fn test_title_falls_back_to_dashboard() {
        assert_eq!(title_for("/nope"), "Dashboard");
        // Matching is exact, so a trailing slash is unmatched too.
        assert_eq!(title_for("/agents/"), "Dashboard");
        assert!(active_item("/agents/").is_none());
    }
}
