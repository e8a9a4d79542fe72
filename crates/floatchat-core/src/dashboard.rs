use chrono::{DateTime, Duration, Utc};
use rand::{rngs::StdRng, Rng};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::{annotation::AnnotationView, explorer::mock_rng};

/// Days of history shown on the trend chart
pub const CHART_DAYS: usize = 30;
/// Bars on the salinity chart
pub const SALINITY_BARS: usize = 12;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} '{value}'")]
pub struct ParseSelectorError {
    kind: &'static str,
    value: String,
}

impl ParseSelectorError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Time window selector on the dashboard controls bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[default]
    #[serde(rename = "1h")]
    LastHour,
    #[serde(rename = "1d")]
    LastDay,
    #[serde(rename = "7d")]
    LastWeek,
    #[serde(rename = "30d")]
    LastMonth,
    #[serde(rename = "90d")]
    LastQuarter,
}

impl TimeRange {
    pub const ALL: [Self; 5] = [
        Self::LastHour,
        Self::LastDay,
        Self::LastWeek,
        Self::LastMonth,
        Self::LastQuarter,
    ];

    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::LastHour => "1h",
            Self::LastDay => "1d",
            Self::LastWeek => "7d",
            Self::LastMonth => "30d",
            Self::LastQuarter => "90d",
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::LastHour => "Last 1 Hour",
            Self::LastDay => "Last 24 Hours",
            Self::LastWeek => "Last 7 Days",
            Self::LastMonth => "Last 30 Days",
            Self::LastQuarter => "Last 3 Months",
        }
    }
}

impl FromStr for TimeRange {
    type Err = ParseSelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|range| range.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSelectorError::new("time range", s))
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Ocean region selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Global,
    Atlantic,
    Pacific,
    Indian,
    Arctic,
    Southern,
}

impl Region {
    pub const ALL: [Self; 6] = [
        Self::Global,
        Self::Atlantic,
        Self::Pacific,
        Self::Indian,
        Self::Arctic,
        Self::Southern,
    ];

    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Atlantic => "atlantic",
            Self::Pacific => "pacific",
            Self::Indian => "indian",
            Self::Arctic => "arctic",
            Self::Southern => "southern",
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Global => "Global Ocean",
            Self::Atlantic => "Atlantic Ocean",
            Self::Pacific => "Pacific Ocean",
            Self::Indian => "Indian Ocean",
            Self::Arctic => "Arctic Ocean",
            Self::Southern => "Southern Ocean",
        }
    }
}

impl FromStr for Region {
    type Err = ParseSelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|region| region.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSelectorError::new("region", s))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One headline card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

/// One day on the trend chart
#[derive(Debug, Clone, Serialize)]
pub struct ChartPoint {
    pub date: DateTime<Utc>,
    pub temperature: f64,
    pub salinity: f64,
    pub depth: f64,
}

#[must_use]
pub fn headline_stats() -> [StatCard; 4] {
    [
        StatCard {
            title: "Active Floats",
            value: "4,127",
            change: "+12",
        },
        StatCard {
            title: "Daily Profiles",
            value: "412",
            change: "+8",
        },
        StatCard {
            title: "Avg Temperature",
            value: "18.4\u{b0}C",
            change: "+0.3\u{b0}C",
        },
        StatCard {
            title: "Avg Salinity",
            value: "34.7 PSU",
            change: "+0.1",
        },
    ]
}

/// Mock monitoring dashboard
///
/// Figures are pseudo-random filler and do not depend on the selectors or the
/// current query. The query is only displayed as an annotation.
pub struct DashboardView {
    annotation: AnnotationView,
    time_range: TimeRange,
    region: Region,
    rng: StdRng,
}

impl DashboardView {
    #[must_use]
    pub fn new(annotation: AnnotationView, seed: Option<u64>) -> Self {
        Self {
            annotation,
            time_range: TimeRange::default(),
            region: Region::default(),
            rng: mock_rng(seed),
        }
    }

    #[must_use]
    pub fn with_selection(mut self, time_range: TimeRange, region: Region) -> Self {
        self.time_range = time_range;
        self.region = region;
        self
    }

    #[must_use]
    pub const fn time_range(&self) -> TimeRange {
        self.time_range
    }

    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    pub fn select_time_range(&mut self, time_range: TimeRange) {
        self.time_range = time_range;
    }

    pub fn select_region(&mut self, region: Region) {
        self.region = region;
    }

    /// The query mirrored from the conversation, if any
    #[must_use]
    pub fn current_query(&self) -> Option<String> {
        self.annotation.current()
    }

    /// Annotation label as shown above the charts
    #[must_use]
    pub fn query_label(&self) -> Option<String> {
        self.current_query().map(|query| format!("Query: {query}"))
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn chart_series(&mut self, now: DateTime<Utc>) -> Vec<ChartPoint> {
        (0..CHART_DAYS)
            .map(|i| {
                let step = i as f64;
                let days_back = i64::try_from(CHART_DAYS - 1 - i).unwrap_or_default();
                ChartPoint {
                    date: now - Duration::days(days_back),
                    temperature: 25.0 - step * 0.1 + self.rng.gen_range(0.0..3.0),
                    salinity: 34.0 + step * 0.02 + self.rng.gen_range(0.0..0.8),
                    depth: self.rng.gen_range(0.0..2000.0),
                }
            })
            .collect()
    }

    /// Salinity bar heights in percent of the chart area
    pub fn salinity_bars(&mut self) -> Vec<f64> {
        (0..SALINITY_BARS)
            .map(|_| 60.0 + self.rng.gen_range(0.0..30.0))
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> [StatCard; 4] {
        headline_stats()
    }
}
