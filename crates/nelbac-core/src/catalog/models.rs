use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry of the hardware catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    /// Unit price in USD
    pub price: f64,
    pub image: String,
    pub category: String,
    pub features: Vec<String>,
    /// Ordered spec sheet (label -> value)
    #[serde(default)]
    pub specs: BTreeMap<String, String>,
}

/// One item of the vision orbit carousel.
///
/// Icon and short label are set at data-definition time rather than
/// derived from the display title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisionItem {
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub image: String,
    /// Stable icon identifier for compact rendering
    pub icon: String,
    /// Short label shown in the compact node and the nav rail
    pub short_label: String,
}

/// Company facts for the About view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: String,
    pub tagline: String,
    pub founded: String,
    pub location: String,
    pub description: String,
    pub mission: String,
    pub stats: Vec<CompanyStat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyStat {
    pub value: String,
    pub label: String,
}
