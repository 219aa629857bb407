// Adapters layer: concrete content store implementations.

pub mod fixtures;
pub mod http;

pub use fixtures::FixtureStore;
pub use http::HttpContentStore;
