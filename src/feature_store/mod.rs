mod models;
mod schema;
mod store;
mod trait_def;

pub use models::{CachedAudioFeatures, FeatureStoreStats};
pub use store::SqliteFeatureStore;
pub use trait_def::FeatureStore;
