/// Dashboard command handlers
use anyhow::Result;
use chrono::Utc;
use floatchat_core::{
    dashboard::{Region, TimeRange},
    AnnotationSlot, Config, DashboardView,
};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Metric")]
    title: &'static str,
    #[tabled(rename = "Value")]
    value: &'static str,
    #[tabled(rename = "Change")]
    change: &'static str,
}

#[derive(Tabled)]
struct ChartRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Temperature (C)")]
    temperature: String,
    #[tabled(rename = "Salinity (PSU)")]
    salinity: String,
    #[tabled(rename = "Depth (m)")]
    depth: String,
}

pub fn print_dashboard(view: &mut DashboardView) {
    println!("\nOcean Data Dashboard");
    println!(
        "{} | {}",
        view.time_range().description(),
        view.region().name()
    );
    if let Some(label) = view.query_label() {
        println!("{label}");
    }

    let stats: Vec<StatRow> = view
        .stats()
        .into_iter()
        .map(|card| StatRow {
            title: card.title,
            value: card.value,
            change: card.change,
        })
        .collect();
    println!("{}", Table::new(stats));

    let rows: Vec<ChartRow> = view
        .chart_series(Utc::now())
        .into_iter()
        .map(|point| ChartRow {
            date: point.date.format("%Y-%m-%d").to_string(),
            temperature: format!("{:.2}", point.temperature),
            salinity: format!("{:.2}", point.salinity),
            depth: format!("{:.0}", point.depth),
        })
        .collect();
    println!("\nTemperature & salinity trends (range 15-30 C)");
    println!("{}", Table::new(rows));

    let bars: Vec<String> = view
        .salinity_bars()
        .iter()
        .map(|height| format!("{height:.0}%"))
        .collect();
    println!("\nSalinity distribution: {}", bars.join(" "));
}

pub fn dashboard_command(config: &Config, range: Option<&str>, region: Option<&str>) -> Result<()> {
    let time_range = match range {
        Some(range) => range.parse::<TimeRange>()?,
        None => config.dashboard.time_range,
    };
    let region = match region {
        Some(region) => region.parse::<Region>()?,
        None => config.dashboard.region,
    };

    // Standalone dashboard: nothing publishes to this slot
    let slot = AnnotationSlot::new();
    let mut view =
        DashboardView::new(slot.view(), config.seed).with_selection(time_range, region);
    print_dashboard(&mut view);
    Ok(())
}
