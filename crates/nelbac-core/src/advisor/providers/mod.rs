mod gemini;
mod openai;

pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::Result;

/// Trait for generative-text advisor providers
#[async_trait::async_trait]
pub trait AdvisorProvider: Send + Sync {
    /// Answer one user prompt. No retry; callers map errors to a fixed
    /// fallback reply.
    async fn advise(&self, prompt: &str) -> Result<String>;
}

/// Build the system instruction grounding replies in the live catalog.
pub fn system_instruction(catalog: &Catalog) -> String {
    let product_context = serde_json::to_string(
        &catalog
            .products
            .iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.name,
                    "description": p.description,
                    "features": p.features,
                    "price": p.price,
                })
            })
            .collect::<Vec<_>>(),
    )
    .unwrap_or_default();

    format!(
        "You are the Nelbac Smart Advisor. Nelbac is a high-end IoT infrastructure \
         company.\nYour goal is to help customers choose from our professional hardware \
         catalog.\n\nProduct Catalog: {product_context}\n\nGuidelines:\n\
         - Be professional, technical yet accessible, and forward-thinking.\n\
         - Recommend specific products based on the user's needs or environmental \
         problems.\n\
         - If the user is starting a new installation, suggest the NBGATV3.2 as the \
         essential foundation.\n\
         - Keep responses concise and focused on hardware integration (under 3 \
         sentences)."
    )
}

/// Create the configured provider.
pub fn build_provider(config: &AppConfig, catalog: &Catalog) -> Result<Arc<dyn AdvisorProvider>> {
    let instruction = system_instruction(catalog);
    let advisor = &config.advisor;

    let provider: Arc<dyn AdvisorProvider> = match advisor.provider.as_str() {
        "openai" => {
            let api_key = advisor.openai_api_key.as_ref().ok_or_else(|| {
                crate::Error::Config("OpenAI API key not configured".to_string())
            })?;
            Arc::new(OpenAiProvider::new(
                api_key,
                &advisor.openai_model,
                instruction,
                advisor.max_reply_tokens,
            ))
        }
        _ => {
            let api_key = advisor.gemini_api_key.as_ref().ok_or_else(|| {
                crate::Error::Config("Gemini API key not configured".to_string())
            })?;
            Arc::new(GeminiProvider::new(
                api_key,
                &advisor.gemini_model,
                instruction,
                advisor.max_reply_tokens,
                advisor.request_timeout_secs,
            ))
        }
    };

    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_instruction_embeds_the_catalog() {
        let instruction = system_instruction(&Catalog::builtin());
        assert!(instruction.contains("NBGATV3.4"));
        assert!(instruction.contains("Smart Advisor"));
    }

    #[test]
    fn build_requires_an_api_key() {
        let config = AppConfig::default();
        assert!(build_provider(&config, &Catalog::builtin()).is_err());
    }
}
