pub mod chat;
pub mod content;

pub use chat::{ChatRequest, ChatResponse};
pub use content::{decode_batch, wire_record};
