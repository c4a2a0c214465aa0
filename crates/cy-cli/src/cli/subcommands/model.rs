use clap::{Args, Subcommand};
use cy_core::ModelRef;

/// Model name and version.
#[derive(Clone, Debug, Args)]
pub struct ModelArgs {
    pub name: String,
    pub version: u32,
}

impl ModelArgs {
    #[must_use]
    pub fn model_ref(&self) -> ModelRef {
        ModelRef::new(self.name.clone(), self.version)
    }
}

/// Model commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ModelCommands {
    /// Whether the model exists (never fails on a missing model).
    Exists(ModelArgs),
    /// Export the model definition.
    Get(ModelArgs),
    /// Show the lock state.
    State(ModelArgs),
    /// Lock the model.
    Lock(ModelArgs),
    /// Unlock the model.
    Unlock(ModelArgs),
    /// Delete the model definition.
    Delete(ModelArgs),
    /// Derive a model definition from a sample JSON file.
    Derive {
        #[command(flatten)]
        model: ModelArgs,
        #[arg(long)]
        file: String,
    },
    /// Delete the model with all its entities and derive it again from a sample file.
    Reset {
        #[command(flatten)]
        model: ModelArgs,
        #[arg(long)]
        file: String,
    },
}
