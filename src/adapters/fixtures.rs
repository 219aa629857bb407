use crate::domain::model::Collection;
use crate::domain::ports::ContentStore;
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// 記憶體中的內容來源，從 JSON 檔載入：
///
/// ```json
/// { "services": [...], "portfolioprojects": [...], "blogposts": [...] }
/// ```
///
/// 缺少的集合視為空集合。
#[derive(Debug, Clone, Default)]
pub struct FixtureStore {
    collections: HashMap<Collection, Vec<Value>>,
    source: Option<PathBuf>,
}

impl FixtureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(mut self, collection: Collection, items: Vec<Value>) -> Self {
        self.collections.insert(collection, items);
        self
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        let mut store = Self::from_json_str(&content)?;
        store.source = Some(path.to_path_buf());
        tracing::debug!("Loaded fixtures from {}", path.display());
        Ok(store)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(content)?;
        let Value::Object(map) = root else {
            return Err(SiteError::ValidationError {
                message: "fixture file must be a JSON object keyed by collection".to_string(),
            });
        };

        let mut store = Self::new();
        for (name, items) in map {
            let collection = match name.parse::<Collection>() {
                Ok(collection) => collection,
                Err(_) => {
                    tracing::warn!("Ignoring unknown fixture collection '{}'", name);
                    continue;
                }
            };
            let items = match items {
                Value::Array(items) => items,
                Value::Object(mut obj) => match obj.remove("items") {
                    Some(Value::Array(items)) => items,
                    _ => {
                        return Err(SiteError::ValidationError {
                            message: format!("fixture collection '{}' has no items array", name),
                        })
                    }
                },
                _ => {
                    return Err(SiteError::ValidationError {
                        message: format!("fixture collection '{}' must be an array", name),
                    })
                }
            };
            store.collections.insert(collection, items);
        }
        Ok(store)
    }
}

#[async_trait]
impl ContentStore for FixtureStore {
    async fn fetch_items(&self, collection: Collection) -> Result<Vec<Value>> {
        Ok(self.collections.get(&collection).cloned().unwrap_or_default())
    }

    async fn fetch_item(&self, collection: Collection, id: &str) -> Result<Option<Value>> {
        Ok(self.collections.get(&collection).and_then(|items| {
            items
                .iter()
                .find(|item| item.get("_id").and_then(Value::as_str) == Some(id))
                .cloned()
        }))
    }

    fn describe(&self) -> String {
        match &self.source {
            Some(path) => format!("fixtures:{}", path.display()),
            None => "fixtures:memory".to_string(),
        }
    }
}
