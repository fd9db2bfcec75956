// ABOUTME: `shoptalk status` — fetch the store profile and print it

use anyhow::{anyhow, Result};
use std::sync::Arc;

use crate::api::{StoreApi, StorefrontClient};
use crate::cli::OutputFormat;
use crate::config::AppConfig;

pub async fn execute(seller_id: Option<String>, format: OutputFormat) -> Result<()> {
    let seller_id = seller_id.ok_or_else(|| {
        anyhow!("No seller id. Pass --seller-id or --launch-url, or run `shoptalk onboard` first.")
    })?;

    let config = AppConfig::load()?;
    let client: Arc<dyn StoreApi> = Arc::new(StorefrontClient::new(
        &config.api_base_url,
        config.request_timeout(),
    )?);

    let record = client.fetch_seller(&seller_id).await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        OutputFormat::Text => {
            println!("Seller:        {}", record.id);
            println!("Store name:    {}", record.bot_title.as_deref().unwrap_or("—"));
            println!("Theme color:   {}", record.theme.as_deref().unwrap_or("—"));
            println!("Logo:          {}", record.image.as_deref().unwrap_or("none"));
            println!("Cues:          {}", record.cues.len());
            println!("Loader texts:  {}", record.loader_texts.len());
            println!(
                "Personalities: {}",
                record
                    .personalities
                    .iter()
                    .map(|p| p.display_name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            println!(
                "Onboarding:    {}",
                if record.has_completed_onboarding {
                    "complete"
                } else {
                    "incomplete"
                }
            );
        }
    }

    Ok(())
}
