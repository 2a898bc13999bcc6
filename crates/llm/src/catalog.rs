//! Model catalog resolved once from configuration.
//!
//! DeepSeek serves the two native models. The R1 and V3 slots prefer
//! OpenRouter when an OpenRouter key is configured and otherwise fall back
//! to the matching native DeepSeek model.

use crate::model::{ChatModel, CompletionModel};
use crate::provider::Provider;
use reqwest::Client;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use trade_dash_core::LlmConfig;

pub const DEEPSEEK_CHAT: &str = "deepseek-chat";
pub const DEEPSEEK_REASONER: &str = "deepseek-reasoner";
pub const OPENROUTER_R1: &str = "deepseek/deepseek-r1-0528";
pub const OPENROUTER_V3: &str = "deepseek/deepseek-v3.2-exp";

/// Named slots the trading agent picks models by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelSlot {
    Deepseek,
    DeepseekThinking,
    DeepseekR1,
    DeepseekV31,
}

impl ModelSlot {
    pub const ALL: [Self; 4] = [
        Self::Deepseek,
        Self::DeepseekThinking,
        Self::DeepseekR1,
        Self::DeepseekV31,
    ];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Deepseek => "deepseek",
            Self::DeepseekThinking => "deepseek-thinking",
            Self::DeepseekR1 => "deepseek-r1",
            Self::DeepseekV31 => "deepseek-v31",
        }
    }
}

impl fmt::Display for ModelSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown model slot: {s}"))
    }
}

/// Immutable set of model handles for the trading agent.
#[derive(Clone)]
pub struct ModelCatalog {
    pub deepseek: Arc<dyn CompletionModel>,
    pub deepseek_thinking: Arc<dyn CompletionModel>,
    pub deepseek_r1: Arc<dyn CompletionModel>,
    pub deepseek_v31: Arc<dyn CompletionModel>,
}

impl ModelCatalog {
    /// Resolves every slot from configuration with a fresh HTTP client.
    #[must_use]
    pub fn resolve(config: &LlmConfig) -> Self {
        Self::resolve_with_client(config, Client::new())
    }

    /// Resolves every slot, sharing `http_client` between all models.
    #[must_use]
    pub fn resolve_with_client(config: &LlmConfig, http_client: Client) -> Self {
        let native = |model_id: &str| -> Arc<dyn CompletionModel> {
            Arc::new(ChatModel::new(
                http_client.clone(),
                Provider::DeepSeek,
                model_id,
                config.deepseek_base_url.clone(),
                config.deepseek_api_key.clone(),
            ))
        };

        let deepseek = native(DEEPSEEK_CHAT);
        let deepseek_thinking = native(DEEPSEEK_REASONER);

        if config.deepseek_api_key.is_none() {
            tracing::warn!("DEEPSEEK_API_KEY is not set; DeepSeek completions will fail");
        }

        let (deepseek_r1, deepseek_v31) = match config.openrouter_api_key.as_ref() {
            Some(key) => {
                let routed = |model_id: &str| -> Arc<dyn CompletionModel> {
                    Arc::new(ChatModel::new(
                        http_client.clone(),
                        Provider::OpenRouter,
                        model_id,
                        config.openrouter_base_url.clone(),
                        Some(key.clone()),
                    ))
                };
                (routed(OPENROUTER_R1), routed(OPENROUTER_V3))
            }
            None => {
                tracing::info!("No OpenRouter key, R1 and V3 slots use DeepSeek directly");
                (Arc::clone(&deepseek_thinking), Arc::clone(&deepseek))
            }
        };

        Self {
            deepseek,
            deepseek_thinking,
            deepseek_r1,
            deepseek_v31,
        }
    }

    #[must_use]
    pub fn get(&self, slot: ModelSlot) -> Arc<dyn CompletionModel> {
        let model = match slot {
            ModelSlot::Deepseek => &self.deepseek,
            ModelSlot::DeepseekThinking => &self.deepseek_thinking,
            ModelSlot::DeepseekR1 => &self.deepseek_r1,
            ModelSlot::DeepseekV31 => &self.deepseek_v31,
        };
        Arc::clone(model)
    }
}

impl fmt::Debug for ModelCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for slot in ModelSlot::ALL {
            let model = self.get(slot);
            map.entry(
                &slot.name(),
                &format!("{}:{}", model.provider(), model.model_id()),
            );
        }
        map.finish()
    }
}
