//! Command implementations.

mod chat;
mod extract;
mod leads;

pub use chat::execute_chat;
pub use extract::execute_extract;
pub use leads::execute_leads;
