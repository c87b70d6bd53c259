use anyhow::Result;

use nelbac_core::catalog::Catalog;
use nelbac_core::AppConfig;

pub fn run(config: &AppConfig) -> Result<()> {
    let catalog = Catalog::load(config.catalog.path.as_deref())?;

    println!("Nelbac catalog ({} products):\n", catalog.products.len());

    for product in &catalog.products {
        println!("{}  ${:.2}  [{}]", product.name, product.price, product.category);
        println!("  {}", product.tagline);
        for feature in &product.features {
            println!("    - {}", feature);
        }
        if !product.specs.is_empty() {
            for (label, value) in &product.specs {
                println!("    {:<14} {}", format!("{}:", label), value);
            }
        }
        println!();
    }

    Ok(())
}
