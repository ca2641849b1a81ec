//! 正面度评分 - 业务能力层

use regex::{Regex, RegexBuilder};

use crate::error::AppResult;
use crate::models::{DealerReview, EmployeeRating};

/// 计入评分的褒义词组（大小写不敏感）
pub const SUPERLATIVES: [&str; 9] = [
    "best",
    "awesome",
    "wonderful",
    "great",
    "above and beyond",
    "impressed",
    "attentive",
    "personable",
    "impeccable",
];

/// 正面度评分器
///
/// 分数 = 各褒义词在文本中不重叠出现的次数之和 + 满分员工数。
/// 只读取文本与员工评分，从不读取 `positivity_score` 字段。
pub struct PositivityScorer {
    patterns: Vec<Regex>,
}

impl PositivityScorer {
    pub fn new() -> AppResult<Self> {
        let patterns = SUPERLATIVES
            .iter()
            .map(|word| {
                RegexBuilder::new(&regex::escape(word))
                    .case_insensitive(true)
                    .build()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// 计算分数
    ///
    /// # 参数
    /// - `text`: 评价文本
    /// - `employee_ratings`: 员工评分
    pub fn score(&self, text: &str, employee_ratings: &[EmployeeRating]) -> u32 {
        let superlatives: usize = self
            .patterns
            .iter()
            .map(|re| re.find_iter(text).count())
            .sum();
        let five_star_employees = employee_ratings.iter().filter(|r| r.is_five_star()).count();

        (superlatives + five_star_employees) as u32
    }

    /// 按评价当前的文本与员工评分重新计算
    pub fn score_review(&self, review: &DealerReview) -> u32 {
        self.score(&review.text, &review.employee_ratings)
    }
}
