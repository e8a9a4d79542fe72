use serde::Serialize;
use std::str::FromStr;

use crate::dashboard::ParseSelectorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetCategory {
    All,
    Core,
    Biogeochemical,
    Deep,
    Realtime,
    Trajectory,
    Metadata,
}

impl DatasetCategory {
    pub const ALL: [Self; 7] = [
        Self::All,
        Self::Core,
        Self::Biogeochemical,
        Self::Deep,
        Self::Realtime,
        Self::Trajectory,
        Self::Metadata,
    ];

    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Core => "core",
            Self::Biogeochemical => "biogeochemical",
            Self::Deep => "deep",
            Self::Realtime => "realtime",
            Self::Trajectory => "trajectory",
            Self::Metadata => "metadata",
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::All => "All Datasets",
            Self::Core => "Core Data",
            Self::Biogeochemical => "Biogeochemical",
            Self::Deep => "Deep Ocean",
            Self::Realtime => "Real-time",
            Self::Trajectory => "Trajectories",
            Self::Metadata => "Metadata",
        }
    }

    #[must_use]
    pub fn includes(&self, other: Self) -> bool {
        *self == Self::All || *self == other
    }
}

impl FromStr for DatasetCategory {
    type Err = ParseSelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSelectorError::new("dataset category", s))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: DatasetCategory,
    pub size: &'static str,
    pub records: &'static str,
    pub last_update: &'static str,
    pub formats: &'static [&'static str],
}

static DATASETS: [Dataset; 6] = [
    Dataset {
        id: "argo-core",
        name: "ARGO Core Temperature & Salinity",
        description: "Global ocean temperature and salinity profiles from autonomous floats",
        category: DatasetCategory::Core,
        size: "2.4 TB",
        records: "2,847,392",
        last_update: "2025-01-15",
        formats: &["NetCDF", "CSV", "JSON"],
    },
    Dataset {
        id: "argo-bgc",
        name: "ARGO Biogeochemical Data",
        description: "Oxygen, pH, nitrate, chlorophyll, and other biogeochemical parameters",
        category: DatasetCategory::Biogeochemical,
        size: "847 GB",
        records: "1,234,567",
        last_update: "2025-01-14",
        formats: &["NetCDF", "CSV"],
    },
    Dataset {
        id: "argo-deep",
        name: "Deep ARGO (4000m+)",
        description: "Extended depth profiles reaching abyssal ocean depths",
        category: DatasetCategory::Deep,
        size: "156 GB",
        records: "89,432",
        last_update: "2025-01-13",
        formats: &["NetCDF", "HDF5"],
    },
    Dataset {
        id: "argo-realtime",
        name: "Real-time ARGO Stream",
        description: "Live data stream from active floats with near real-time updates",
        category: DatasetCategory::Realtime,
        size: "Live Stream",
        records: "~400/day",
        last_update: "Live",
        formats: &["JSON", "WebSocket"],
    },
    Dataset {
        id: "argo-trajectories",
        name: "Float Trajectory Data",
        description: "GPS positions and drift patterns of ARGO floats over time",
        category: DatasetCategory::Trajectory,
        size: "89 GB",
        records: "4,127 floats",
        last_update: "2025-01-15",
        formats: &["CSV", "GeoJSON", "KML"],
    },
    Dataset {
        id: "argo-metadata",
        name: "Float Metadata & Documentation",
        description: "Technical specifications, calibration data, and deployment information",
        category: DatasetCategory::Metadata,
        size: "2.1 GB",
        records: "15,847 floats",
        last_update: "2025-01-12",
        formats: &["XML", "JSON", "PDF"],
    },
];

/// Static catalog of downloadable ARGO datasets
pub struct DatasetCatalog {
    datasets: &'static [Dataset],
}

impl DatasetCatalog {
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            datasets: &DATASETS,
        }
    }

    #[must_use]
    pub fn datasets(&self) -> &[Dataset] {
        self.datasets
    }

    /// Datasets whose name or description contains `search` (case-insensitive)
    /// and whose category is included by `category`
    #[must_use]
    pub fn filter(&self, search: &str, category: DatasetCategory) -> Vec<&Dataset> {
        let needle = search.trim().to_lowercase();
        self.datasets
            .iter()
            .filter(|dataset| category.includes(dataset.category))
            .filter(|dataset| {
                needle.is_empty()
                    || dataset.name.to_lowercase().contains(&needle)
                    || dataset.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Number of datasets per category, `All` first
    #[must_use]
    pub fn category_counts(&self) -> Vec<(DatasetCategory, usize)> {
        DatasetCategory::ALL
            .into_iter()
            .map(|category| {
                let count = self
                    .datasets
                    .iter()
                    .filter(|dataset| category.includes(dataset.category))
                    .count();
                (category, count)
            })
            .collect()
    }
}

impl Default for DatasetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
