use crate::domain::model::{Entity, ListResponse};
use crate::domain::ports::ContentStore;
use crate::utils::error::Result;
use std::sync::Arc;

/// 泛型 CRUD 客戶端（唯讀）。集合名稱由記錄型別決定。
#[derive(Clone)]
pub struct CrudClient {
    store: Arc<dyn ContentStore>,
}

impl CrudClient {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    pub async fn get_all<T: Entity>(&self) -> Result<ListResponse<T>> {
        let raw = self.store.fetch_items(T::COLLECTION).await?;
        let mut items = Vec::with_capacity(raw.len());

        for value in raw {
            match serde_json::from_value::<T>(value) {
                Ok(item) => items.push(item),
                // 單筆格式錯誤不影響整個列表
                Err(e) => tracing::warn!("Skipping malformed {} record: {}", T::COLLECTION, e),
            }
        }

        Ok(ListResponse { items })
    }

    pub async fn get_by_id<T: Entity>(&self, id: &str) -> Result<Option<T>> {
        match self.store.fetch_item(T::COLLECTION, id).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    pub fn source(&self) -> String {
        self.store.describe()
    }
}
