//! Complete CLI command.
//!
//! Sends a single prompt to one catalog slot and prints the answer.

use anyhow::{Context, Result};
use clap::Args;
use trade_dash_llm::{CompletionRequest, ModelCatalog, ModelSlot};

/// Arguments for the complete command.
#[derive(Args, Debug, Clone)]
pub struct CompleteArgs {
    /// Prompt text
    pub prompt: String,

    /// Catalog slot: deepseek, deepseek-thinking, deepseek-r1 or deepseek-v31
    #[arg(short, long, default_value = "deepseek")]
    pub model: ModelSlot,

    /// Optional system message
    #[arg(long)]
    pub system: Option<String>,

    /// Sampling temperature
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Maximum tokens to generate
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Print the model's reasoning when it returns one
    #[arg(long)]
    pub show_reasoning: bool,

    /// Configuration profile
    #[arg(long)]
    pub profile: Option<String>,
}

/// Runs the complete command.
///
/// # Errors
/// Returns an error if configuration loading or the completion request fails.
pub async fn run_complete(args: CompleteArgs) -> Result<()> {
    let config = super::load_config(args.profile.as_deref())?;
    let catalog = ModelCatalog::resolve(&config.llm);
    let model = catalog.get(args.model);

    let mut request = CompletionRequest::from_prompt(args.prompt);
    if let Some(system) = args.system {
        request = request.with_system(system);
    }
    request.temperature = args.temperature;
    request.max_tokens = args.max_tokens;

    tracing::info!(
        "Sending prompt to {} ({})",
        model.model_id(),
        model.provider()
    );

    let completion = model
        .generate_completion(&request)
        .await
        .with_context(|| format!("Completion failed for slot {}", args.model))?;

    if args.show_reasoning {
        if let Some(reasoning) = &completion.reasoning {
            println!("--- reasoning ---\n{reasoning}\n--- answer ---");
        }
    }
    println!("{}", completion.content);

    tracing::info!(
        "Used {} tokens ({} prompt, {} completion)",
        completion.usage.total_tokens,
        completion.usage.prompt_tokens,
        completion.usage.completion_tokens
    );

    Ok(())
}
