/// Dataset catalog command handler
use anyhow::Result;
use floatchat_core::catalog::{Dataset, DatasetCatalog, DatasetCategory};
use tabled::{Table, Tabled};

use super::helpers::truncate_str;

#[derive(Tabled)]
struct DatasetRow {
    #[tabled(rename = "ID")]
    id: &'static str,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Size")]
    size: &'static str,
    #[tabled(rename = "Records")]
    records: &'static str,
    #[tabled(rename = "Updated")]
    last_update: &'static str,
    #[tabled(rename = "Formats")]
    formats: String,
}

impl From<&Dataset> for DatasetRow {
    fn from(dataset: &Dataset) -> Self {
        Self {
            id: dataset.id,
            name: dataset.name,
            description: truncate_str(dataset.description, 40),
            size: dataset.size,
            records: dataset.records,
            last_update: dataset.last_update,
            formats: dataset.formats.join(", "),
        }
    }
}

pub fn datasets_command(search: &str, category: &str) -> Result<()> {
    let category: DatasetCategory = category.parse()?;
    let catalog = DatasetCatalog::builtin();

    let counts: Vec<String> = catalog
        .category_counts()
        .into_iter()
        .map(|(category, count)| format!("{} ({count})", category.name()))
        .collect();
    println!("Categories: {}", counts.join(" | "));

    let matches = catalog.filter(search, category);
    if matches.is_empty() {
        println!("No datasets match '{search}' in {}", category.name());
        return Ok(());
    }

    let rows: Vec<DatasetRow> = matches.into_iter().map(DatasetRow::from).collect();
    println!("{}", Table::new(rows));
    Ok(())
}
