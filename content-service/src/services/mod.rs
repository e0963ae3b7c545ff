pub mod completion;
pub mod metrics;
pub mod store;

pub use completion::{CompletionProvider, MockCompletionProvider, OpenAiConfig, OpenAiProvider};
pub use metrics::{get_metrics, init_metrics};
pub use store::{ContentStore, InMemoryContentStore, MongoDb, StoreError};
