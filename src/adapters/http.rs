use crate::domain::model::{Collection, ListResponse};
use crate::domain::ports::ContentStore;
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

/// 透過 HTTP 存取內容平台
///
/// 列表：`GET {endpoint}/collections/{collection}/items` 回傳 `{"items": [...]}`
/// 單筆：`GET {endpoint}/collections/{collection}/items/{id}`，404 代表不存在
#[derive(Debug, Clone)]
pub struct HttpContentStore {
    client: Client,
    endpoint: Url,
}

impl HttpContentStore {
    pub fn new(
        endpoint: &str,
        api_key: Option<&str>,
        extra_headers: &HashMap<String, String>,
        timeout: Duration,
    ) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| SiteError::InvalidConfigValueError {
            field: "store.endpoint".to_string(),
            value: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        let mut headers = HeaderMap::new();
        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            headers.insert(AUTHORIZATION, header_value("store.api_key", key)?);
        }
        for (name, value) in extra_headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| SiteError::InvalidConfigValueError {
                    field: "store.headers".to_string(),
                    value: name.clone(),
                    reason: e.to_string(),
                })?;
            headers.insert(header_name, header_value("store.headers", value)?);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self { client, endpoint })
    }

    fn items_url(&self, collection: Collection, id: Option<&str>) -> Result<Url> {
        let mut url = self.endpoint.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| SiteError::ConfigError {
                message: format!("store endpoint cannot be a base URL: {}", self.endpoint),
            })?;
            segments
                .pop_if_empty()
                .extend(["collections", collection.as_str(), "items"]);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }
}

fn header_value(field: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| SiteError::InvalidConfigValueError {
        field: field.to_string(),
        value: "<redacted>".to_string(),
        reason: e.to_string(),
    })
}

#[async_trait]
impl ContentStore for HttpContentStore {
    async fn fetch_items(&self, collection: Collection) -> Result<Vec<Value>> {
        let url = self.items_url(collection, None)?;
        tracing::debug!("Fetching {} from {}", collection, url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Store response status for {}: {}", collection, status);

        if !status.is_success() {
            return Err(SiteError::StoreStatusError {
                collection: collection.to_string(),
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await?;
        let items = match body {
            // 部分平台直接回傳陣列
            Value::Array(items) => items,
            other => serde_json::from_value::<ListResponse<Value>>(other)?.items,
        };

        tracing::debug!("Fetched {} records from {}", items.len(), collection);
        Ok(items)
    }

    async fn fetch_item(&self, collection: Collection, id: &str) -> Result<Option<Value>> {
        let url = self.items_url(collection, Some(id))?;
        tracing::debug!("Fetching {}/{} from {}", collection, id, url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(SiteError::StoreStatusError {
                collection: collection.to_string(),
                status: status.as_u16(),
            });
        }

        match response.json::<Value>().await? {
            Value::Null => Ok(None),
            Value::Object(mut obj) if obj.contains_key("item") && !obj.contains_key("_id") => {
                Ok(obj.remove("item").filter(|v| !v.is_null()))
            }
            record => Ok(Some(record)),
        }
    }

    fn describe(&self) -> String {
        self.endpoint.to_string()
    }
}
