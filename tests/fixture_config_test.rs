use anyhow::Result;
use codejinx_site::core::render::render_page;
use codejinx_site::utils::validation::Validate;
use codejinx_site::{Page, SiteConfig, TomlConfig};
use codejinx_site::{Facet, FacetSelection};
use tempfile::TempDir;

const FIXTURES: &str = r#"{
  "services": [
    {"_id": "svc-web", "serviceName": "Web Development", "shortDescription": "Fast, modern sites"}
  ],
  "portfolioprojects": [
    {"_id": "p1", "projectName": "Clinic Portal", "discipline": "Web", "completionDate": "2024-11-20"},
    {"_id": "p2", "projectName": "Brand Refresh", "discipline": "Design"}
  ],
  "blogposts": [
    {"_id": "my-post", "title": "Id collision", "publicationDate": "2023-01-01"},
    {"_id": "b2", "slug": "my-post", "title": "Real post", "content": "Intro.\n\nBody."},
    {"_id": "b3", "slug": "café-notes", "title": "Café notes", "seoDescription": "Where we work"}
  ]
}"#;

/// 寫出 fixtures 與 TOML 設定檔，回傳設定檔路徑
async fn write_site(temp_dir: &TempDir) -> Result<String> {
    let temp_path = temp_dir.path().to_str().unwrap().replace('\\', "/");
    let fixtures_path = format!("{}/content.json", temp_path);
    tokio::fs::write(&fixtures_path, FIXTURES).await?;

    let config_content = format!(
        r#"
[store]
fixtures = "{}"

[site]
base_name = "/site"
home_services = 2

[tools]
simplify_delay_ms = 0
contact_delay_ms = 0
"#,
        fixtures_path
    );
    let config_path = format!("{}/codejinx.toml", temp_path);
    tokio::fs::write(&config_path, config_content).await?;
    Ok(config_path)
}

#[tokio::test]
async fn test_fixture_site_from_toml_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = write_site(&temp_dir).await?;

    let file = TomlConfig::from_file(&config_path)?;
    file.validate()?;
    let config = SiteConfig::from_toml(&file);
    config.validate()?;
    let site = config.build_context().await?;

    let (_, page) = site.open("/site/blog/my-post", FacetSelection::all()).await;
    let Page::BlogPost { state } = &page else {
        panic!("expected blog post page");
    };
    assert_eq!(state.ready().unwrap().id, "b2");

    let text = render_page(&page, site.router());
    assert!(text.contains("Real post"));
    assert!(text.contains("Intro.\n\nBody."));
    Ok(())
}

#[tokio::test]
async fn test_fixture_encoded_slug_finds_post() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = write_site(&temp_dir).await?;
    let site = SiteConfig::from_toml(&TomlConfig::from_file(&config_path)?)
        .build_context()
        .await?;

    let (_, page) = site
        .open("/site/blog/caf%C3%A9-notes", FacetSelection::all())
        .await;
    assert!(!page.is_not_found());

    let text = render_page(&page, site.router());
    assert!(text.contains("Café notes"));
    assert!(text.contains("Summary: Where we work"));
    Ok(())
}

#[tokio::test]
async fn test_fixture_portfolio_render() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = write_site(&temp_dir).await?;
    let site = SiteConfig::from_toml(&TomlConfig::from_file(&config_path)?)
        .build_context()
        .await?;

    let selection = FacetSelection::all().with(Facet::Discipline, "Web");
    let (_, page) = site.open("/site/portfolio", selection).await;
    let text = render_page(&page, site.router());

    assert!(text.contains("Discipline (Web): All, Web, Design"));
    assert!(text.contains("Clinic Portal </site/portfolio/p1>"));
    assert!(text.contains("Completed: November 20, 2024"));
    assert!(!text.contains("Brand Refresh"));
    Ok(())
}

#[tokio::test]
async fn test_fixture_tools_use_configured_delays() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = write_site(&temp_dir).await?;
    let site = SiteConfig::from_toml(&TomlConfig::from_file(&config_path)?)
        .build_context()
        .await?;

    let output = site
        .simplifier()
        .simplify("Explain recursion", codejinx_site::app::Difficulty::Easy)
        .await?;
    assert!(output.summary.contains("easy difficulty"));

    let mut form = codejinx_site::app::ContactForm {
        name: "Sam".to_string(),
        email: "sam@example.com".to_string(),
        subject: "Hello".to_string(),
        message: "Quick question".to_string(),
    };
    site.contact_desk().submit(&mut form).await?;
    assert!(form.message.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_missing_fixture_file_fails_to_build() {
    let config = SiteConfig {
        fixtures: Some("/definitely/not/here.json".to_string()),
        ..SiteConfig::default()
    };
    assert!(config.validate().is_ok());
    assert!(config.build_context().await.is_err());
}
