// Presentational components - Pure props-to-markup templates
use crate::domain::activity::ActivityPoint;
use crate::domain::health::HealthProfile;
use crate::domain::metrics::SystemHealth;
use crate::domain::navigation::Icon;
use crate::domain::task::RecentTask;
use askama::Template;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Increase,
    Decrease,
}

/// Percentage delta shown under a card's value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricChange {
    pub value: f64,
    pub kind: ChangeKind,
}

impl MetricChange {
    pub fn increase(value: f64) -> Self {
        Self {
            value,
            kind: ChangeKind::Increase,
        }
    }

    pub fn color(&self) -> &'static str {
        match self.kind {
            ChangeKind::Increase => "text-green-600",
            ChangeKind::Decrease => "text-red-600",
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self.kind {
            ChangeKind::Increase => "↑",
            ChangeKind::Decrease => "↓",
        }
    }
}

#[derive(Template, Debug, Clone)]
#[template(path = "components/metric_card.html")]
pub struct MetricCard {
    pub title: &'static str,
    pub value: String,
    pub icon: Icon,
    pub change: Option<MetricChange>,
    pub description: Option<&'static str>,
}

impl MetricCard {
    pub fn new(title: &'static str, value: impl ToString, icon: Icon) -> Self {
        Self {
            title,
            value: value.to_string(),
            icon,
            change: None,
            description: None,
        }
    }

    pub fn with_change(mut self, change: MetricChange) -> Self {
        self.change = Some(change);
        self
    }

    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 200.0;
const PLOT_LEFT: f64 = 40.0;
const PLOT_RIGHT: f64 = 590.0;
const PLOT_TOP: f64 = 10.0;
const PLOT_BOTTOM: f64 = 176.0;
const Y_TICK_STEP: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub position: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: &'static str,
    pub color: &'static str,
    pub points: String,
}

/// Dual-line chart of tasks and relevance on one shared y axis.
#[derive(Template, Debug, Clone)]
#[template(path = "components/activity_chart.html")]
pub struct ActivityChart {
    pub width: String,
    pub height: String,
    pub plot_left: String,
    pub plot_right: String,
    pub label_x: String,
    pub label_y: String,
    pub x_labels: Vec<AxisLabel>,
    pub y_ticks: Vec<AxisLabel>,
    pub series: Vec<ChartSeries>,
}

impl ActivityChart {
    pub fn new(data: &[ActivityPoint]) -> Self {
        let peak = data
            .iter()
            .flat_map(|p| [p.tasks, p.relevance])
            .fold(0.0_f64, f64::max);
        let y_max = ((peak / Y_TICK_STEP).ceil() * Y_TICK_STEP).max(Y_TICK_STEP);

        let x_at = |i: usize| {
            if data.len() < 2 {
                PLOT_LEFT
            } else {
                PLOT_LEFT + (PLOT_RIGHT - PLOT_LEFT) * i as f64 / (data.len() - 1) as f64
            }
        };
        let y_at = |v: f64| PLOT_BOTTOM - (PLOT_BOTTOM - PLOT_TOP) * v / y_max;

        let polyline = |value: fn(&ActivityPoint) -> f64| {
            data.iter()
                .enumerate()
                .map(|(i, p)| format!("{:.1},{:.1}", x_at(i), y_at(value(p))))
                .collect::<Vec<_>>()
                .join(" ")
        };

        let x_labels = data
            .iter()
            .enumerate()
            .map(|(i, p)| AxisLabel {
                position: format!("{:.1}", x_at(i)),
                text: p.time.to_string(),
            })
            .collect();

        let tick_count = (y_max / Y_TICK_STEP) as usize;
        let y_ticks = (0..=tick_count)
            .map(|i| {
                let value = i as f64 * Y_TICK_STEP;
                AxisLabel {
                    position: format!("{:.1}", y_at(value)),
                    text: value.to_string(),
                }
            })
            .collect();

        Self {
            width: CHART_WIDTH.to_string(),
            height: CHART_HEIGHT.to_string(),
            plot_left: PLOT_LEFT.to_string(),
            plot_right: PLOT_RIGHT.to_string(),
            label_x: (PLOT_LEFT - 6.0).to_string(),
            label_y: (PLOT_BOTTOM + 16.0).to_string(),
            x_labels,
            y_ticks,
            series: vec![
                ChartSeries {
                    name: "Tasks Completed",
                    color: "#3B82F6",
                    points: polyline(|p| p.tasks),
                },
                ChartSeries {
                    name: "Avg Relevance",
                    color: "#10B981",
                    points: polyline(|p| p.relevance),
                },
            ],
        }
    }
}

#[derive(Template, Debug, Clone)]
#[template(path = "components/recent_tasks.html")]
pub struct RecentTasksPanel {
    pub tasks: &'static [RecentTask],
}

impl RecentTasksPanel {
    pub fn new(tasks: &'static [RecentTask]) -> Self {
        Self { tasks }
    }
}

#[derive(Template, Debug, Clone)]
#[template(path = "components/system_health.html")]
pub struct SystemHealthPanel {
    pub profile: HealthProfile,
}

impl SystemHealthPanel {
    pub fn new(health: SystemHealth) -> Self {
        Self {
            profile: HealthProfile::for_health(health),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::activity::ACTIVITY_SERIES;
    use crate::domain::task::RECENT_TASKS;

    #[test]
    fn test_metric_card_optional_parts() {
        let bare = MetricCard::new("Total Agents", 12, Icon::Users).render().unwrap();
        assert!(bare.contains(">12</p>"));
        assert!(!bare.contains("↑"));
        assert!(!bare.contains("text-xs"));

        let full = MetricCard::new("Avg Relevance", "0.82", Icon::AlertCircle)
            .with_change(MetricChange::increase(0.05))
            .with_description("Content relevance score")
            .render()
            .unwrap();
        assert!(full.contains("0.05%"));
        assert!(full.contains("text-green-600"));
        assert!(full.contains("Content relevance score"));
        assert!(full.contains(r#"data-lucide="alert-circle""#));
    }

    #[test]
    fn test_decrease_styling() {
        let change = MetricChange {
            value: 4.0,
            kind: ChangeKind::Decrease,
        };
        assert_eq!(change.color(), "text-red-600");
        assert_eq!(change.arrow(), "↓");
    }

    #[test]
    fn test_activity_chart_geometry() {
        let chart = ActivityChart::new(&ACTIVITY_SERIES);

        let labels: Vec<&str> = chart.x_labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(labels, ["00:00", "04:00", "08:00", "12:00", "16:00", "20:00"]);

        // Peak of 32 tasks rounds the axis up to 40.
        assert_eq!(chart.y_ticks.len(), 5);
        assert_eq!(chart.y_ticks.last().unwrap().text, "40");

        assert_eq!(chart.series.len(), 2);
        for series in &chart.series {
            assert_eq!(series.points.split(' ').count(), 6);
        }
        assert!(chart.series[0].points.starts_with("40.0,"));
        assert!(chart.series[0].points.ends_with("590.0,101.3"));

        let html = chart.render().unwrap();
        assert!(html.contains("24h Activity"));
        assert!(html.contains("Tasks Completed"));
        assert!(html.contains("Avg Relevance"));
    }

    #[test]
    fn test_recent_tasks_render_in_order() {
        let html = RecentTasksPanel::new(&RECENT_TASKS).render().unwrap();

        let first = html.find("Generate trending content").unwrap();
        let second = html.find("Analyze market trends").unwrap();
        let third = html.find("Publish to social media").unwrap();
        assert!(first < second && second < third);

        assert!(html.contains(">in progress</span>"));
        assert!(html.contains(">completed</span>"));
        assert!(html.contains(">pending</span>"));
        assert!(!html.contains("in_progress"));
    }

    #[test]
    fn test_system_health_branches() {
        let warning = SystemHealthPanel::new(SystemHealth::Warning).render().unwrap();
        assert!(warning.contains("Minor Issues Detected"));
        assert!(warning.contains("Some services experiencing delays"));
        assert!(warning.contains("120ms"));
        assert!(!warning.contains("All Systems Operational"));

        let critical = SystemHealthPanel::new(SystemHealth::Critical).render().unwrap();
        assert!(critical.contains("120+ pending"));
        assert!(critical.contains("8.7%"));
        assert!(critical.contains(r#"data-lucide="x-circle""#));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let card = MetricCard::new("Active Now", 8, Icon::Activity)
            .with_change(MetricChange::increase(1.0));
        assert_eq!(card.render().unwrap(), card.render().unwrap());

        let chart = ActivityChart::new(&ACTIVITY_SERIES);
        assert_eq!(chart.render().unwrap(), chart.render().unwrap());

        let health = SystemHealthPanel::new(SystemHealth::Healthy);
        assert_eq!(health.render().unwrap(), health.render().unwrap());
    }
}
