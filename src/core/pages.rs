//! Page loaders: fetch a collection through the CRUD client, then apply the
//! page's transform. Every loader returns a [`PageState`] instead of an
//! error so callers can tell an empty collection, a missing record and a
//! failed fetch apart.

use crate::core::crud::CrudClient;
use crate::core::facet::{filter_projects, FacetOptions, FacetSelection};
use crate::core::lookup::find_post;
use crate::core::recency::sorted_by_recency;
use crate::domain::model::{BlogPost, Entity, PortfolioProject, Service};
use crate::utils::error::SiteError;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "camelCase")]
pub enum PageState<T> {
    Ready(T),
    /// 集合本身沒有記錄
    Empty,
    NotFound,
    FetchFailed { message: String, retryable: bool },
}

impl<T> PageState<T> {
    pub fn from_error(err: &SiteError) -> Self {
        match err {
            SiteError::NotFound { .. } => PageState::NotFound,
            other => PageState::FetchFailed {
                message: other.user_friendly_message(),
                retryable: other.is_retryable(),
            },
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            PageState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, PageState::Ready(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeLimits {
    pub services: usize,
    pub projects: usize,
}

impl Default for HomeLimits {
    fn default() -> Self {
        Self {
            services: 4,
            projects: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub services: Vec<Service>,
    pub featured_projects: Vec<PortfolioProject>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioView {
    pub options: FacetOptions,
    pub selection: FacetSelection,
    pub projects: Vec<PortfolioProject>,
    pub total: usize,
}

fn log_failure(page: &str, err: &SiteError) {
    tracing::warn!(
        "{} failed to load: {} (category: {:?})",
        page,
        err,
        err.category()
    );
}

/// 首頁：服務與專案兩個請求同時發出，都完成後才組成頁面。
/// 兩個集合都是空的也照常顯示（靜態區塊仍然存在）。
pub async fn load_home(crud: &CrudClient, limits: HomeLimits) -> PageState<HomeView> {
    let (services, projects) = tokio::join!(
        crud.get_all::<Service>(),
        crud.get_all::<PortfolioProject>()
    );

    match (services, projects) {
        (Ok(services), Ok(projects)) => PageState::Ready(HomeView {
            services: services.items.into_iter().take(limits.services).collect(),
            featured_projects: projects.items.into_iter().take(limits.projects).collect(),
        }),
        (Err(e), _) | (_, Err(e)) => {
            log_failure("home", &e);
            PageState::from_error(&e)
        }
    }
}

async fn load_list<T: Entity>(crud: &CrudClient) -> PageState<Vec<T>> {
    match crud.get_all::<T>().await {
        Ok(list) if list.items.is_empty() => PageState::Empty,
        Ok(list) => PageState::Ready(list.items),
        Err(e) => {
            log_failure(T::COLLECTION.as_str(), &e);
            PageState::from_error(&e)
        }
    }
}

async fn load_detail<T: Entity>(crud: &CrudClient, id: &str) -> PageState<T> {
    match crud.get_by_id::<T>(id).await {
        Ok(Some(record)) => PageState::Ready(record),
        Ok(None) => {
            tracing::info!("{} '{}' not found", T::COLLECTION, id);
            PageState::NotFound
        }
        Err(e) => {
            log_failure(T::COLLECTION.as_str(), &e);
            PageState::from_error(&e)
        }
    }
}

pub async fn load_services(crud: &CrudClient) -> PageState<Vec<Service>> {
    load_list(crud).await
}

pub async fn load_service(crud: &CrudClient, id: &str) -> PageState<Service> {
    load_detail(crud, id).await
}

pub async fn load_project(crud: &CrudClient, id: &str) -> PageState<PortfolioProject> {
    load_detail(crud, id).await
}

/// 作品集：選項從完整列表推導，過濾結果為空時仍是 `Ready`（頁面顯示「沒有符合的專案」）
pub async fn load_portfolio(crud: &CrudClient, selection: FacetSelection) -> PageState<PortfolioView> {
    load_list::<PortfolioProject>(crud).await.map_ready(|projects| {
        let projects_view = filter_projects(&projects, &selection);
        tracing::debug!(
            "Portfolio filter kept {}/{} projects",
            projects_view.len(),
            projects.len()
        );
        PortfolioView {
            options: FacetOptions::derive(&projects),
            selection,
            total: projects.len(),
            projects: projects_view,
        }
    })
}

pub async fn load_blog(crud: &CrudClient) -> PageState<Vec<BlogPost>> {
    load_list::<BlogPost>(crud).await.map_ready(sorted_by_recency)
}

/// 文章頁：取回全部文章後以 slug/id 查找
pub async fn load_blog_post(crud: &CrudClient, token: &str) -> PageState<BlogPost> {
    match load_list::<BlogPost>(crud).await {
        PageState::Ready(posts) => match find_post(&posts, token) {
            Some(post) => PageState::Ready(post.clone()),
            None => {
                tracing::info!("blog post '{}' not found", token);
                PageState::NotFound
            }
        },
        PageState::Empty | PageState::NotFound => PageState::NotFound,
        PageState::FetchFailed { message, retryable } => PageState::FetchFailed { message, retryable },
    }
}

impl<T> PageState<T> {
    fn map_ready<U>(self, f: impl FnOnce(T) -> U) -> PageState<U> {
        match self {
            PageState::Ready(data) => PageState::Ready(f(data)),
            PageState::Empty => PageState::Empty,
            PageState::NotFound => PageState::NotFound,
            PageState::FetchFailed { message, retryable } => PageState::FetchFailed { message, retryable },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::FixtureStore;
    use crate::core::facet::Facet;
    use crate::domain::model::Collection;
    use std::sync::Arc;

    fn crud_with(store: FixtureStore) -> CrudClient {
        CrudClient::new(Arc::new(store))
    }

    fn services(n: usize) -> Vec<serde_json::Value> {
        (1..=n)
            .map(|i| serde_json::json!({"_id": format!("s{}", i), "serviceName": format!("Service {}", i)}))
            .collect()
    }

    #[tokio::test]
    async fn test_home_limits_services_and_projects() {
        let store = FixtureStore::new()
            .with_items(Collection::Services, services(6))
            .with_items(
                Collection::PortfolioProjects,
                (1..=5).map(|i| serde_json::json!({"_id": format!("p{}", i)})).collect(),
            );

        let state = load_home(&crud_with(store), HomeLimits::default()).await;
        let home = state.ready().unwrap();

        assert_eq!(home.services.len(), 4);
        assert_eq!(home.services[0].id, "s1");
        assert_eq!(home.featured_projects.len(), 3);
        assert_eq!(home.featured_projects[2].id, "p3");
    }

    #[tokio::test]
    async fn test_home_with_empty_collections_is_ready() {
        let state = load_home(&crud_with(FixtureStore::new()), HomeLimits::default()).await;
        assert!(state.is_ready());
    }

    #[tokio::test]
    async fn test_empty_collection_is_empty_state() {
        let state = load_services(&crud_with(FixtureStore::new())).await;
        assert_eq!(state, PageState::Empty);
    }

    #[tokio::test]
    async fn test_detail_not_found() {
        let store = FixtureStore::new().with_items(Collection::Services, services(2));
        let crud = crud_with(store);

        assert!(load_service(&crud, "s2").await.is_ready());
        assert_eq!(load_service(&crud, "nope").await, PageState::NotFound);
    }

    #[tokio::test]
    async fn test_portfolio_filters_and_keeps_options() {
        let store = FixtureStore::new().with_items(
            Collection::PortfolioProjects,
            vec![
                serde_json::json!({"_id": "p1", "discipline": "Web"}),
                serde_json::json!({"_id": "p2", "discipline": "Design"}),
                serde_json::json!({"_id": "p3", "discipline": "Web"}),
            ],
        );
        let crud = crud_with(store);

        let state = load_portfolio(&crud, FacetSelection::all().with(Facet::Discipline, "Design")).await;
        let view = state.ready().unwrap();
        assert_eq!(view.total, 3);
        assert_eq!(view.projects.len(), 1);
        assert_eq!(view.options.disciplines, vec!["All", "Web", "Design"]);

        let state = load_portfolio(&crud, FacetSelection::all().with(Facet::Discipline, "Audio")).await;
        assert!(state.ready().unwrap().projects.is_empty());
    }

    #[tokio::test]
    async fn test_blog_sorted_and_post_lookup() {
        let store = FixtureStore::new().with_items(
            Collection::BlogPosts,
            vec![
                serde_json::json!({"_id": "b1", "slug": "older", "publicationDate": "2024-01-01"}),
                serde_json::json!({"_id": "b2", "publicationDate": null}),
                serde_json::json!({"_id": "b3", "slug": "newer", "publicationDate": "2025-06-01"}),
            ],
        );
        let crud = crud_with(store);

        let blog = load_blog(&crud).await;
        let ids: Vec<&str> = blog.ready().unwrap().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b3", "b1", "b2"]);

        assert_eq!(load_blog_post(&crud, "newer").await.ready().unwrap().id, "b3");
        assert_eq!(load_blog_post(&crud, "b2").await.ready().unwrap().id, "b2");
        assert_eq!(load_blog_post(&crud, "missing").await, PageState::NotFound);
    }

    #[tokio::test]
    async fn test_blog_post_in_empty_collection_is_not_found() {
        let state = load_blog_post(&crud_with(FixtureStore::new()), "anything").await;
        assert_eq!(state, PageState::NotFound);
    }

    #[test]
    fn test_from_error_maps_not_found() {
        let err = SiteError::NotFound {
            collection: "services".to_string(),
            id: "x".to_string(),
        };
        assert_eq!(PageState::<()>::from_error(&err), PageState::NotFound);

        let err = SiteError::StoreStatusError {
            collection: "services".to_string(),
            status: 502,
        };
        assert!(matches!(
            PageState::<()>::from_error(&err),
            PageState::FetchFailed { retryable: true, .. }
        ));
    }
}
