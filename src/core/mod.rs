pub mod collection;
pub mod errors;
pub mod filter;
pub mod models;
pub mod tasks;

pub use collection::VerbCollection;
pub use errors::VerbarioError;
pub use filter::filter_verbs;
pub use models::{Tense, VerbDraft, VerbId, VerbRecord, PERSONS};
