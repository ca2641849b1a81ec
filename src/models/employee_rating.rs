use serde::Serialize;

/// 评价中提到的单个员工及其评分
///
/// 只用于输出；NaN 评分在 JSON 中写为 `null`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeRating {
    /// 员工姓名（去除首尾空白）
    pub name: String,
    /// 评分 0.0–5.0，无法解析时为 NaN
    pub rating: f64,
}

impl EmployeeRating {
    pub fn new(name: impl Into<String>, rating: f64) -> Self {
        Self {
            name: name.into(),
            rating,
        }
    }

    /// 是否为满分评价
    pub fn is_five_star(&self) -> bool {
        self.rating == 5.0
    }
}
