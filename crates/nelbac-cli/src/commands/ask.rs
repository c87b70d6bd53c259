use anyhow::Result;

use nelbac_core::advisor::{providers::build_provider, AdvisorSession};
use nelbac_core::catalog::Catalog;
use nelbac_core::storage::Database;
use nelbac_core::AppConfig;

/// One-shot advisor exchange; the transcript persists across runs.
pub async fn run(config: &AppConfig, prompt: &str) -> Result<()> {
    let catalog = Catalog::load(config.catalog.path.as_deref())?;
    let provider = build_provider(config, &catalog)?;

    let db = Database::new(config).await?;
    let mut session = AdvisorSession::open(db).await?;

    let reply = session.send(provider.as_ref(), prompt).await?;
    println!("{}", reply);

    Ok(())
}
