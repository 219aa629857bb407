use crate::domain::model::Collection;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// 唯讀的內容平台存取介面。記錄以原始 JSON 傳回，型別轉換由 `CrudClient` 負責。
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// 取回集合內所有記錄，順序由平台決定
    async fn fetch_items(&self, collection: Collection) -> Result<Vec<Value>>;

    /// 依 id 取單筆；不存在時回傳 `Ok(None)`
    async fn fetch_item(&self, collection: Collection, id: &str) -> Result<Option<Value>>;

    /// 日誌用的來源描述
    fn describe(&self) -> String;
}
