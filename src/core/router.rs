use crate::domain::model::Collection;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", content = "token", rename_all = "kebab-case")]
pub enum Route {
    Home,
    Services,
    ServiceDetail(String),
    Portfolio,
    ProjectDetail(String),
    Blog,
    BlogPost(String),
    StudentTools,
    About,
    Contact,
    Privacy,
    Terms,
    Cookies,
}

impl Route {
    /// 站內正規路徑（不含 base name）
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Services => "/services".to_string(),
            Route::ServiceDetail(id) => format!("/services/{}", id),
            Route::Portfolio => "/portfolio".to_string(),
            Route::ProjectDetail(id) => format!("/portfolio/{}", id),
            Route::Blog => "/blog".to_string(),
            Route::BlogPost(slug) => format!("/blog/{}", slug),
            Route::StudentTools => "/student-tools".to_string(),
            Route::About => "/about".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Privacy => "/privacy".to_string(),
            Route::Terms => "/terms".to_string(),
            Route::Cookies => "/cookies".to_string(),
        }
    }

    /// 詳細頁對應的集合與 token
    pub fn record(&self) -> Option<(Collection, &str)> {
        match self {
            Route::ServiceDetail(id) => Some((Collection::Services, id.as_str())),
            Route::ProjectDetail(id) => Some((Collection::PortfolioProjects, id.as_str())),
            Route::BlogPost(slug) => Some((Collection::BlogPosts, slug.as_str())),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// 解析結果；未知路徑導回首頁並標記 `redirected`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub route: Route,
    pub redirected: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Router {
    base_name: String,
}

impl Router {
    pub fn new(base_name: &str) -> Self {
        let trimmed = base_name.trim().trim_end_matches('/');
        let base_name = if trimmed.is_empty() {
            String::new()
        } else if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{}", trimmed)
        };
        Self { base_name }
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// 對外連結：加上 base name
    pub fn href(&self, route: &Route) -> String {
        match (self.base_name.as_str(), route) {
            ("", _) => route.path(),
            (base, Route::Home) => format!("{}/", base),
            (base, _) => format!("{}{}", base, route.path()),
        }
    }

    pub fn resolve(&self, path: &str) -> Resolution {
        // 去掉 query 與 fragment
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let relative = self.strip_base(path);

        match Self::match_segments(relative) {
            Some(route) => Resolution {
                route,
                redirected: false,
            },
            None => {
                tracing::debug!("No route for '{}', redirecting to /", path);
                Resolution {
                    route: Route::Home,
                    redirected: true,
                }
            }
        }
    }

    fn strip_base<'a>(&self, path: &'a str) -> &'a str {
        if self.base_name.is_empty() {
            return path;
        }
        match path.strip_prefix(self.base_name.as_str()) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => path,
        }
    }

    fn match_segments(path: &str) -> Option<Route> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => Route::Home,
            ["services"] => Route::Services,
            ["services", id] => Route::ServiceDetail(decode_token(id)),
            ["portfolio"] => Route::Portfolio,
            ["portfolio", id] => Route::ProjectDetail(decode_token(id)),
            ["blog"] => Route::Blog,
            ["blog", slug] => Route::BlogPost(decode_token(slug)),
            ["student-tools"] => Route::StudentTools,
            ["about"] => Route::About,
            ["contact"] => Route::Contact,
            ["privacy"] => Route::Privacy,
            ["terms"] => Route::Terms,
            ["cookies"] => Route::Cookies,
            _ => return None,
        };
        Some(route)
    }
}

/// 詳細頁 token 需先 percent-decode 才能對上記錄；非 UTF-8 時保留原字串
fn decode_token(segment: &str) -> String {
    match urlencoding::decode(segment) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            tracing::debug!("Keeping raw route token '{}': {}", segment, e);
            segment.to_string()
        }
    }
}
