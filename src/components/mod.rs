// Export components
pub mod answer;
pub mod ask;
pub mod context;
pub mod fetcher;
pub mod group_registry;
pub mod meetup;
pub mod search;
pub mod website;

pub use answer::{AnswerGenerator, GroqClient};
pub use ask::{Answerer, AskService};
pub use context::ContextBuilder;
pub use fetcher::PageFetcher;
pub use group_registry::{GroupConfig, GroupRegistry};
pub use search::BraveSearchClient;
