use crate::domain::model::{BlogPost, Entity};

/// 以 slug 或 id 找文章。先比對所有記錄的 slug，都沒有再比對 id；
/// 兩輪都按取回順序回傳第一筆。
pub fn find_post<'a>(posts: &'a [BlogPost], token: &str) -> Option<&'a BlogPost> {
    posts
        .iter()
        .find(|p| p.slug.as_deref() == Some(token))
        .or_else(|| find_by_id(posts, token))
}

pub fn find_by_id<'a, T: Entity>(records: &'a [T], id: &str) -> Option<&'a T> {
    records.iter().find(|r| r.id() == id)
}
