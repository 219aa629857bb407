use codejinx_site::core::pages::PageState;
use codejinx_site::{Facet, FacetSelection, Page, Route, SiteConfig};
use httpmock::prelude::*;

fn config_for(server: &MockServer) -> SiteConfig {
    SiteConfig {
        endpoint: Some(server.url("/api")),
        api_key: Some("test-key".to_string()),
        ..SiteConfig::default()
    }
}

#[tokio::test]
async fn test_home_page_fetches_both_collections() {
    let server = MockServer::start();

    let services_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/collections/services/items")
            .header("authorization", "test-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "items": [
                    {"_id": "s1", "serviceName": "Web Development"},
                    {"_id": "s2", "serviceName": "UI/UX Design"},
                    {"_id": "s3", "serviceName": "Mobile Apps"},
                    {"_id": "s4", "serviceName": "Cloud"},
                    {"_id": "s5", "serviceName": "Consulting"}
                ]
            }));
    });
    let projects_mock = server.mock(|when, then| {
        when.method(GET).path("/api/collections/portfolioprojects/items");
        then.status(200).json_body(serde_json::json!({
            "items": [
                {"_id": "p1", "projectName": "Clinic Portal"},
                {"_id": "p2", "projectName": "Law Firm CRM"}
            ]
        }));
    });

    let site = config_for(&server).build_context().await.unwrap();
    let (route, page) = site.open("/", FacetSelection::all()).await;

    services_mock.assert();
    projects_mock.assert();
    assert_eq!(route, Route::Home);

    let Page::Home { state } = page else {
        panic!("expected home page");
    };
    let home = state.ready().expect("home should be ready");
    assert_eq!(home.services.len(), 4);
    assert_eq!(home.services[3].id, "s4");
    assert_eq!(home.featured_projects.len(), 2);
}

#[tokio::test]
async fn test_home_page_fails_when_one_fetch_fails() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/collections/services/items");
        then.status(200).json_body(serde_json::json!({"items": []}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/collections/portfolioprojects/items");
        then.status(500);
    });

    let site = config_for(&server).build_context().await.unwrap();
    let (_, page) = site.open("/", FacetSelection::all()).await;

    let (_, retryable) = page.failure().expect("home should report the failure");
    assert!(retryable);
}

#[tokio::test]
async fn test_portfolio_filters_over_http() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/collections/portfolioprojects/items");
        then.status(200).json_body(serde_json::json!({
            "items": [
                {"_id": "p1", "discipline": "Web", "serviceType": "Frontend", "skillCategory": "React"},
                {"_id": "p2", "discipline": "Design", "serviceType": "Branding", "skillCategory": "Figma"},
                {"_id": "p3", "discipline": "Web", "serviceType": "Backend", "skillCategory": "Rust"}
            ]
        }));
    });

    let site = config_for(&server).build_context().await.unwrap();
    let selection = FacetSelection::all()
        .with(Facet::Discipline, "Web")
        .with(Facet::ServiceType, "Backend");
    let (_, page) = site.open("/portfolio", selection).await;

    let Page::Portfolio { state } = page else {
        panic!("expected portfolio page");
    };
    let view = state.ready().unwrap();
    assert_eq!(view.total, 3);
    assert_eq!(view.projects.len(), 1);
    assert_eq!(view.projects[0].id, "p3");
    assert_eq!(view.options.service_types, vec!["All", "Frontend", "Branding", "Backend"]);
}

#[tokio::test]
async fn test_service_detail_uses_get_by_id() {
    let server = MockServer::start();
    let detail_mock = server.mock(|when, then| {
        when.method(GET).path("/api/collections/services/items/s1");
        then.status(200).json_body(serde_json::json!({
            "_id": "s1",
            "serviceName": "Web Development",
            "callToActionUrl": "https://codejinx.example/start"
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/collections/services/items/gone");
        then.status(404);
    });

    let site = config_for(&server).build_context().await.unwrap();

    let (_, page) = site.open("/services/s1", FacetSelection::all()).await;
    detail_mock.assert();
    let Page::ServiceDetail { state } = page else {
        panic!("expected service detail");
    };
    assert_eq!(
        state.ready().unwrap().call_to_action_url.as_deref(),
        Some("https://codejinx.example/start")
    );

    let (_, page) = site.open("/services/gone", FacetSelection::all()).await;
    assert!(page.is_not_found());
}

#[tokio::test]
async fn test_blog_list_is_sorted_and_empty_blog_is_empty_state() {
    let server = MockServer::start();
    let mut blog_mock = server.mock(|when, then| {
        when.method(GET).path("/api/collections/blogposts/items");
        then.status(200).json_body(serde_json::json!({
            "items": [
                {"_id": "b1", "title": "Old", "publicationDate": "2024-01-01T00:00:00Z"},
                {"_id": "b2", "title": "Draft"},
                {"_id": "b3", "title": "New", "publicationDate": "2025-06-01T00:00:00Z"}
            ]
        }));
    });

    let site = config_for(&server).build_context().await.unwrap();
    let (_, page) = site.open("/blog", FacetSelection::all()).await;
    let Page::Blog { state } = page else {
        panic!("expected blog page");
    };
    let titles: Vec<&str> = state
        .ready()
        .unwrap()
        .iter()
        .filter_map(|p| p.title.as_deref())
        .collect();
    assert_eq!(titles, vec!["New", "Old", "Draft"]);

    blog_mock.delete();
    server.mock(|when, then| {
        when.method(GET).path("/api/collections/blogposts/items");
        then.status(200).json_body(serde_json::json!({"items": []}));
    });

    let (_, page) = site.open("/blog", FacetSelection::all()).await;
    assert_eq!(page, Page::Blog { state: PageState::Empty });
}
