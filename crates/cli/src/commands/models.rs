//! Models CLI command.
//!
//! Prints which provider and model backs each slot of the model catalog.

use anyhow::Result;
use clap::Args;
use trade_dash_llm::{ModelCatalog, ModelSlot};

/// Arguments for the models command.
#[derive(Args, Debug, Clone)]
pub struct ModelsArgs {
    /// Configuration profile
    #[arg(long)]
    pub profile: Option<String>,
}

/// Runs the models command.
///
/// # Errors
/// Returns an error if configuration cannot be loaded.
pub fn run_models(args: &ModelsArgs) -> Result<()> {
    let config = super::load_config(args.profile.as_deref())?;
    let catalog = ModelCatalog::resolve(&config.llm);

    println!();
    println!("{:<20} {:<12} MODEL", "SLOT", "PROVIDER");
    println!("{}", "─".repeat(60));
    for slot in ModelSlot::ALL {
        let model = catalog.get(slot);
        println!(
            "{:<20} {:<12} {}",
            slot.name(),
            model.provider().name(),
            model.model_id()
        );
    }
    println!();

    if config.llm.openrouter_api_key.is_none() {
        println!("OPENROUTER_API_KEY not set: R1 and V3 slots fall back to DeepSeek.");
    }
    if config.llm.deepseek_api_key.is_none() {
        println!("DEEPSEEK_API_KEY not set: DeepSeek completions will fail.");
    }

    Ok(())
}
