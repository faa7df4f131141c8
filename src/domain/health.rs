// System health presentation table
use super::metrics::SystemHealth;
use super::navigation::Icon;

/// Everything the health panel shows for one health state.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthProfile {
    pub icon: Icon,
    pub text_color: &'static str,
    pub background: &'static str,
    pub status: &'static str,
    pub detail: &'static str,
    pub response_time: &'static str,
    pub task_queue: &'static str,
    pub error_rate: &'static str,
}

impl HealthProfile {
    pub fn for_health(health: SystemHealth) -> Self {
        match health {
            SystemHealth::Healthy => Self {
                icon: Icon::CheckCircle,
                text_color: "text-green-600",
                background: "bg-green-100",
                status: "All Systems Operational",
                detail: "All services running normally",
                response_time: "45ms",
                task_queue: "12 pending",
                error_rate: "0.1%",
            },
            SystemHealth::Warning => Self {
                icon: Icon::AlertTriangle,
                text_color: "text-yellow-600",
                background: "bg-yellow-100",
                status: "Minor Issues Detected",
                detail: "Some services experiencing delays",
                response_time: "120ms",
                task_queue: "45 pending",
                error_rate: "2.3%",
            },
            SystemHealth::Critical => Self {
                icon: Icon::XCircle,
                text_color: "text-red-600",
                background: "bg-red-100",
                status: "Critical Issues Require Attention",
                detail: "Multiple services require immediate attention",
                response_time: "350ms",
                task_queue: "120+ pending",
                error_rate: "8.7%",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secondary_metrics_table() {
        let cases = [
            (SystemHealth::Healthy, "45ms", "12 pending", "0.1%"),
            (SystemHealth::Warning, "120ms", "45 pending", "2.3%"),
            (SystemHealth::Critical, "350ms", "120+ pending", "8.7%"),
        ];

        for (health, response, queue, errors) in cases {
            let profile = HealthProfile::for_health(health);
            assert_eq!(profile.response_time, response);
            assert_eq!(profile.task_queue, queue);
            assert_eq!(profile.error_rate, errors);
        }
    }

    #[test]
    fn test_icons_are_distinct() {
        let healthy = HealthProfile::for_health(SystemHealth::Healthy);
        let warning = HealthProfile::for_health(SystemHealth::Warning);
        let critical = HealthProfile::for_health(SystemHealth::Critical);

        assert_ne!(healthy.icon, warning.icon);
        assert_ne!(warning.icon, critical.icon);
        assert_eq!(critical.status, "Critical Issues Require Attention");
    }
}
