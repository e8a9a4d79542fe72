/// One-shot question handler
use anyhow::Result;
use floatchat_core::{Config, DashboardPage, TurnOutcome};

use super::helpers::format_message;

pub async fn ask_command(config: &Config, text: &str, json: bool) -> Result<()> {
    let mut page = DashboardPage::from_config(config)?;
    let outcome = page.send(text).await?;

    if json {
        let transcript = serde_json::json!({
            "messages": page.conversation().messages(),
            "data_query": matches!(outcome, TurnOutcome::Replied { published: true, .. }),
            "current_query": page.dashboard().current_query(),
        });
        println!("{}", serde_json::to_string_pretty(&transcript)?);
        return Ok(());
    }

    for message in page.conversation().messages().iter().skip(1) {
        println!("{}", format_message(message));
    }
    if let Some(label) = page.dashboard().query_label() {
        println!("Dashboard updated. {label}");
    }
    Ok(())
}
