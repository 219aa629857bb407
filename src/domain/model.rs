use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// 內容平台上的集合名稱
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collection {
    #[serde(rename = "services")]
    Services,
    #[serde(rename = "portfolioprojects")]
    PortfolioProjects,
    #[serde(rename = "blogposts")]
    BlogPosts,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Services,
        Collection::PortfolioProjects,
        Collection::BlogPosts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Services => "services",
            Collection::PortfolioProjects => "portfolioprojects",
            Collection::BlogPosts => "blogposts",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown collection: {}", s))
    }
}

/// 每個集合的記錄型別都實作這個 trait，讓 CRUD 客戶端可以泛型取用
pub trait Entity: DeserializeOwned + Serialize + Clone + Send + Sync + 'static {
    const COLLECTION: Collection;

    fn id(&self) -> &str;

    /// 列表與標題顯示用的名稱
    fn display_name(&self) -> Option<&str>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdDate", default, deserialize_with = "flexible_date", skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(rename = "_updatedDate", default, deserialize_with = "flexible_date", skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transferable_skills: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_to_action_url: Option<String>,
}

impl Entity for Service {
    const COLLECTION: Collection = Collection::Services;

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> Option<&str> {
        self.service_name.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioProject {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdDate", default, deserialize_with = "flexible_date", skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(rename = "_updatedDate", default, deserialize_with = "flexible_date", skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discipline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialized_terminology: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_highlights: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_image: Option<String>,
    #[serde(default, deserialize_with = "flexible_date", skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<DateTime<Utc>>,
}

impl Entity for PortfolioProject {
    const COLLECTION: Collection = Collection::PortfolioProjects;

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdDate", default, deserialize_with = "flexible_date", skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(rename = "_updatedDate", default, deserialize_with = "flexible_date", skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "flexible_date", skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
}

impl BlogPost {
    /// 文章連結用的 token：有 slug 用 slug，否則用 id
    pub fn route_token(&self) -> &str {
        match self.slug.as_deref() {
            Some(slug) if !slug.is_empty() => slug,
            _ => &self.id,
        }
    }

    /// 內文依換行切成段落，忽略空白行
    pub fn paragraphs(&self) -> Vec<&str> {
        self.content
            .as_deref()
            .map(|c| c.lines().map(str::trim).filter(|l| !l.is_empty()).collect())
            .unwrap_or_default()
    }
}

impl Entity for BlogPost {
    const COLLECTION: Collection = Collection::BlogPosts;

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// `getAll` 的回應外殼
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Text(String),
    Wrapped {
        #[serde(rename = "$date")]
        date: String,
    },
    Millis(i64),
    Other(serde_json::Value),
}

/// 解析日期字串。接受 RFC 3339、無時區的 `YYYY-MM-DDTHH:MM:SS` 以及純日期。
pub fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

// 無法解析的日期視為缺值，不讓整筆記錄失敗
fn flexible_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawDate>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawDate::Text(text)) | Some(RawDate::Wrapped { date: text }) => parse_date(&text),
        Some(RawDate::Millis(ms)) => DateTime::from_timestamp_millis(ms),
        Some(RawDate::Other(_)) | None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_blog_post_with_all_date_shapes() {
        let posts: Vec<BlogPost> = serde_json::from_value(serde_json::json!([
            {"_id": "a", "publicationDate": "2025-06-01T10:00:00Z"},
            {"_id": "b", "publicationDate": "2024-01-01"},
            {"_id": "c", "publicationDate": {"$date": "2023-03-04T00:00:00.000Z"}},
            {"_id": "d", "publicationDate": "not a date"},
            {"_id": "e", "publicationDate": null},
            {"_id": "f"}
        ]))
        .unwrap();

        assert_eq!(
            posts[0].publication_date,
            Some(Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap())
        );
        assert_eq!(
            posts[1].publication_date,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(
            posts[2].publication_date,
            Some(Utc.with_ymd_and_hms(2023, 3, 4, 0, 0, 0).unwrap())
        );
        assert!(posts[3].publication_date.is_none());
        assert!(posts[4].publication_date.is_none());
        assert!(posts[5].publication_date.is_none());
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let service: Service = serde_json::from_value(serde_json::json!({
            "_id": "svc-1",
            "serviceName": "Web Development"
        }))
        .unwrap();

        assert_eq!(service.id(), "svc-1");
        assert_eq!(service.display_name(), Some("Web Development"));
        assert!(service.short_description.is_none());
        assert!(service.call_to_action_url.is_none());
    }

    #[test]
    fn test_project_uses_camel_case_fields() {
        let project: PortfolioProject = serde_json::from_value(serde_json::json!({
            "_id": "p1",
            "projectName": "Clinic Portal",
            "serviceType": "Full Stack",
            "skillCategory": "Healthcare",
            "completionDate": "2024-11-20"
        }))
        .unwrap();

        assert_eq!(project.service_type.as_deref(), Some("Full Stack"));
        assert_eq!(project.skill_category.as_deref(), Some("Healthcare"));
        assert!(project.completion_date.is_some());
    }

    #[test]
    fn test_route_token_falls_back_to_id() {
        let mut post: BlogPost =
            serde_json::from_value(serde_json::json!({"_id": "post-42"})).unwrap();
        assert_eq!(post.route_token(), "post-42");

        post.slug = Some(String::new());
        assert_eq!(post.route_token(), "post-42");

        post.slug = Some("hello-world".to_string());
        assert_eq!(post.route_token(), "hello-world");
    }

    #[test]
    fn test_paragraphs_split_on_newlines() {
        let post: BlogPost = serde_json::from_value(serde_json::json!({
            "_id": "p",
            "content": "First line.\n\nSecond line.\n  \nThird."
        }))
        .unwrap();
        assert_eq!(post.paragraphs(), vec!["First line.", "Second line.", "Third."]);
    }

    #[test]
    fn test_collection_names_round_trip_through_from_str() {
        assert_eq!("blogposts".parse::<Collection>().unwrap(), Collection::BlogPosts);
        assert!("members".parse::<Collection>().is_err());
    }
}
