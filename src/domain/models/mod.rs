mod author;
mod error;
mod exchange;
mod message;
mod options;
mod provider;
mod slash_commands;

pub use author::*;
pub use error::*;
pub use exchange::*;
pub use message::*;
pub use options::*;
pub use provider::*;
pub use slash_commands::*;
