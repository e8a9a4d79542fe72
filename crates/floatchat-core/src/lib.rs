pub mod annotation;
pub mod catalog;
pub mod classifier;
pub mod config;
pub mod conversation;
pub mod dashboard;
pub mod explorer;
pub mod message;
pub mod page;
pub mod prompts;
pub mod simulator;

pub use annotation::{AnnotationSlot, AnnotationView};
pub use classifier::{Classification, DataQueryDetector, QueryClassifier};
pub use config::Config;
pub use conversation::{Conversation, ConversationState, SubmitError, TurnOutcome};
pub use dashboard::DashboardView;
pub use message::{ChatMessage, Sender};
pub use page::DashboardPage;
pub use simulator::{DelayedReplySimulator, ReplyFault, ReplySimulator};
