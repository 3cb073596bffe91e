pub mod api;
pub mod types;

pub use api::{RemoteClient, COLLECTION_KEY};
pub use types::StoredVerb;
