pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FixtureStore, HttpContentStore};
pub use config::{SiteConfig, TomlConfig};
pub use crate::core::{
    crud::CrudClient,
    facet::{Facet, FacetChoice, FacetSelection},
    pages::PageState,
    router::{Route, Router},
    site::{Page, SiteContext},
};
pub use utils::error::{Result, SiteError};
