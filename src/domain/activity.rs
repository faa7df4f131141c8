// 24h activity series

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityPoint {
    pub time: &'static str,
    pub tasks: f64,
    pub relevance: f64,
}

impl ActivityPoint {
    const fn new(time: &'static str, tasks: f64, relevance: f64) -> Self {
        Self {
            time,
            tasks,
            relevance,
        }
    }
}

pub static ACTIVITY_SERIES: [ActivityPoint; 6] = [
    ActivityPoint::new("00:00", 12.0, 0.75),
    ActivityPoint::new("04:00", 8.0, 0.82),
    ActivityPoint::new("08:00", 24.0, 0.88),
    ActivityPoint::new("12:00", 32.0, 0.91),
    ActivityPoint::new("16:00", 28.0, 0.86),
    ActivityPoint::new("20:00", 18.0, 0.79),
];
