use anyhow::Result;

use nelbac_core::advisor::AdvisorSession;
use nelbac_core::storage::Database;
use nelbac_core::AppConfig;

pub async fn run(config: &AppConfig) -> Result<()> {
    let db = Database::new(config).await?;
    let mut session = AdvisorSession::open(db).await?;
    session.clear().await?;

    println!("Advisor transcript cleared.");
    Ok(())
}
