use crate::domain::model::BlogPost;

/// 依發佈日期由新到舊排序。沒有日期的文章排在最後，同日期保留原順序（穩定排序）。
pub fn sort_by_recency(posts: &mut [BlogPost]) {
    // Option 的排序中 None 小於任何 Some，所以反向比較後自然沉到底
    posts.sort_by(|a, b| b.publication_date.cmp(&a.publication_date));
}

pub fn sorted_by_recency(mut posts: Vec<BlogPost>) -> Vec<BlogPost> {
    sort_by_recency(&mut posts);
    posts
}
