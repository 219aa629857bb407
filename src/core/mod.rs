pub mod crud;
pub mod facet;
pub mod lookup;
pub mod pages;
pub mod recency;
pub mod render;
pub mod router;
pub mod site;

pub use crate::domain::model::{BlogPost, Collection, Entity, ListResponse, PortfolioProject, Service};
pub use crate::domain::ports::ContentStore;
pub use crate::utils::error::Result;
