/// Data explorer command handler
use anyhow::Result;
use chrono::Utc;
use floatchat_core::{
    explorer::{generate_floats, mock_rng, FloatRecord, Layer},
    Config,
};
use tabled::{Table, Tabled};

use super::helpers::{escape_csv, local_time};

#[derive(Tabled)]
struct FloatRow {
    #[tabled(rename = "Float")]
    id: String,
    #[tabled(rename = "Lat")]
    lat: String,
    #[tabled(rename = "Lon")]
    lon: String,
    #[tabled(rename = "Temp (C)")]
    temperature: String,
    #[tabled(rename = "Salinity")]
    salinity: String,
    #[tabled(rename = "Depth (m)")]
    depth: String,
    #[tabled(rename = "Last update")]
    last_update: String,
}

impl From<&FloatRecord> for FloatRow {
    fn from(float: &FloatRecord) -> Self {
        Self {
            id: float.id.clone(),
            lat: format!("{:.2}", float.lat),
            lon: format!("{:.2}", float.lon),
            temperature: format!("{:.1}", float.temperature),
            salinity: format!("{:.2}", float.salinity),
            depth: format!("{:.0}", float.depth),
            last_update: float.last_update.format("%Y-%m-%d").to_string(),
        }
    }
}

pub fn floats_to_csv(floats: &[FloatRecord]) -> String {
    let mut out = String::from("id,lat,lon,temperature,salinity,depth,last_update\n");
    for float in floats {
        out.push_str(&format!(
            "{},{:.4},{:.4},{:.2},{:.3},{:.1},{}\n",
            escape_csv(&float.id),
            float.lat,
            float.lon,
            float.temperature,
            float.salinity,
            float.depth,
            float.last_update.to_rfc3339()
        ));
    }
    out
}

pub fn explorer_command(config: &Config, count: usize, csv: bool) -> Result<()> {
    let mut rng = mock_rng(config.seed);
    let now = Utc::now();
    let floats = generate_floats(&mut rng, count, now);

    if csv {
        print!("{}", floats_to_csv(&floats));
        return Ok(());
    }

    println!(
        "\nData Explorer ({} floats, generated {})",
        floats.len(),
        local_time(now)
    );
    let layers: Vec<&str> = Layer::ALL.iter().map(Layer::name).collect();
    println!("Layers: {}", layers.join(", "));
    let rows: Vec<FloatRow> = floats.iter().map(FloatRow::from).collect();
    println!("{}", Table::new(rows));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floats_to_csv() {
        let mut rng = mock_rng(Some(9));
        let floats = generate_floats(&mut rng, 3, Utc::now());
        let csv = floats_to_csv(&floats);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "id,lat,lon,temperature,salinity,depth,last_update");
        assert!(lines[1].starts_with("ARGO_1000,"));
        assert_eq!(lines[3].split(',').count(), 7);
    }
}
