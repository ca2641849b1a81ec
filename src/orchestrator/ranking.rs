use crate::models::DealerReview;

/// 筛选五星评价，按正面度降序取前 `top_n` 条
///
/// 排序稳定：同分评价保持爬取顺序
pub fn rank_reviews(reviews: Vec<DealerReview>, top_n: usize) -> Vec<DealerReview> {
    let mut five_star: Vec<DealerReview> =
        reviews.into_iter().filter(|r| r.is_five_star()).collect();
    five_star.sort_by(|a, b| b.positivity_score.cmp(&a.positivity_score));
    five_star.truncate(top_n);
    five_star
}
