pub mod entity;
pub mod model;
pub mod search;

pub use entity::EntityCommands;
pub use model::{ModelArgs, ModelCommands};
pub use search::SearchCommands;
