use chrono::{DateTime, Duration, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;

/// Map layers offered by the data explorer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Temperature,
    Salinity,
    Floats,
    Currents,
}

impl Layer {
    pub const ALL: [Self; 4] = [
        Self::Temperature,
        Self::Salinity,
        Self::Floats,
        Self::Currents,
    ];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Salinity => "Salinity",
            Self::Floats => "Float Positions",
            Self::Currents => "Ocean Currents",
        }
    }
}

/// A mock ARGO float as plotted on the explorer map
#[derive(Debug, Clone, Serialize)]
pub struct FloatRecord {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub temperature: f64,
    pub salinity: f64,
    pub depth: f64,
    pub last_update: DateTime<Utc>,
}

/// Generator for mock figures, reproducible when seeded
#[must_use]
pub fn mock_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

const WEEK_SECS: i64 = 7 * 24 * 60 * 60;

/// Scatter `count` floats over the globe, each reporting within the past week
pub fn generate_floats<R: Rng>(
    rng: &mut R,
    count: usize,
    now: DateTime<Utc>,
) -> Vec<FloatRecord> {
    (0..count)
        .map(|i| FloatRecord {
            id: format!("ARGO_{}", 1000 + i),
            lat: rng.gen_range(-90.0..90.0),
            lon: rng.gen_range(-180.0..180.0),
            temperature: rng.gen_range(15.0..30.0),
            salinity: rng.gen_range(34.0..36.0),
            depth: rng.gen_range(0.0..2000.0),
            last_update: now - Duration::seconds(rng.gen_range(0..WEEK_SECS)),
        })
        .collect()
}
