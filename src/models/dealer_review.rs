use serde::Serialize;

use super::EmployeeRating;

/// 一条经销商评价
///
/// `positivity_score` 只由 `text` 与 `employee_ratings` 计算得出，
/// 构造时一次性算好，之后不再单独修改。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DealerReview {
    /// 标题 + 空格 + 正文
    pub text: String,
    /// 星级 1–5
    pub stars: u8,
    pub employee_ratings: Vec<EmployeeRating>,
    pub positivity_score: u32,
}

impl DealerReview {
    /// 拼接标题与正文，中间固定一个空格
    pub fn join_text(title: &str, body: &str) -> String {
        format!("{} {}", title, body)
    }

    /// 是否为五星评价
    pub fn is_five_star(&self) -> bool {
        self.stars == 5
    }
}
