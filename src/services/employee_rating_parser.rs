//! 员工评分解析 - 业务能力层
//!
//! 只负责把一组员工区块解析为 `EmployeeRating`

use regex::Regex;
use scraper::{ElementRef, Selector};
use tracing::debug;

use crate::error::AppResult;
use crate::models::EmployeeRating;
use crate::services::markup::{self, EMPLOYEE_NAME_SELECTOR, EMPLOYEE_RATING_SELECTOR};

/// 员工评分提取能力
pub trait EmployeeRatingExtractor: Send + Sync {
    /// 输出与输入区块一一对应、顺序一致；空输入返回空列表
    fn extract_employee_ratings(&self, blocks: &[ElementRef<'_>]) -> Vec<EmployeeRating>;
}

/// 默认的员工评分解析器
pub struct EmployeeRatingParser {
    name: Selector,
    rating_value: Selector,
    leading_number: Regex,
}

impl EmployeeRatingParser {
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            name: markup::compile(EMPLOYEE_NAME_SELECTOR)?,
            rating_value: markup::compile(EMPLOYEE_RATING_SELECTOR)?,
            leading_number: Regex::new(r"^\s*[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?")?,
        })
    }

    /// 解析单个员工区块
    ///
    /// 姓名缺失时为空字符串；评分无法解析时为 NaN
    pub fn parse_block(&self, block: ElementRef<'_>) -> EmployeeRating {
        let name = block
            .select(&self.name)
            .next()
            .map(|a| a.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        let rating_text = markup::select_text(block, &self.rating_value);
        let rating = self.parse_rating(&rating_text);

        EmployeeRating { name, rating }
    }

    /// 取文本开头最长的数字前缀，如 `"5.0 5 out of 5 Stars"` → 5.0
    pub fn parse_rating(&self, text: &str) -> f64 {
        self.leading_number
            .find(text)
            .and_then(|m| m.as_str().trim().parse::<f64>().ok())
            .unwrap_or(f64::NAN)
    }
}

impl EmployeeRatingExtractor for EmployeeRatingParser {
    fn extract_employee_ratings(&self, blocks: &[ElementRef<'_>]) -> Vec<EmployeeRating> {
        let ratings: Vec<EmployeeRating> =
            blocks.iter().map(|b| self.parse_block(*b)).collect();
        debug!("解析到 {} 个员工评分", ratings.len());
        ratings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::markup::EMPLOYEE_BLOCK_SELECTOR;
    use scraper::Html;

    const EMPLOYEES_HTML: &str = include_str!("../../tests/fixtures/employees.html");

    fn extract(html: &str) -> Vec<EmployeeRating> {
        let parser = EmployeeRatingParser::new().unwrap();
        let document = Html::parse_document(html);
        let selector = markup::compile(EMPLOYEE_BLOCK_SELECTOR).unwrap();
        let blocks: Vec<_> = document.select(&selector).collect();
        parser.extract_employee_ratings(&blocks)
    }

    #[test]
    fn test_parse_employee_ratings() {
        let ratings = extract(EMPLOYEES_HTML);

        assert_eq!(ratings.len(), 2);
        assert_eq!(ratings[0].name, "Adrian \"AyyDee\" Cortes");
        assert_eq!(ratings[0].rating, 5.0);
        assert_eq!(ratings[1].name, "Taylor Prickett");
        assert_eq!(ratings[1].rating, 4.0);
    }

    #[test]
    fn test_parse_empty_collection() {
        assert!(extract("<div></div>").is_empty());
    }

    #[test]
    fn test_missing_anchor_gives_empty_name() {
        let html = r#"<div class="employees-wrapper"><div class="review-employee">
            <div class="employee-rating-badge-sm"><span>3.5</span></div>
        </div></div>"#;
        let ratings = extract(html);

        assert_eq!(ratings.len(), 1);
        assert_eq!(ratings[0].name, "");
        assert_eq!(ratings[0].rating, 3.5);
    }

    #[test]
    fn test_unparseable_rating_is_nan() {
        let html = r#"<div class="employees-wrapper"><div class="review-employee">
            <a>Jane</a><div class="employee-rating-badge-sm"><span>n/a</span></div>
        </div></div>"#;
        let ratings = extract(html);

        assert!(ratings[0].rating.is_nan());
        assert!(!ratings[0].is_five_star());
    }

    #[test]
    fn test_parse_rating_prefix() {
        let parser = EmployeeRatingParser::new().unwrap();

        assert_eq!(parser.parse_rating("5.0"), 5.0);
        assert_eq!(parser.parse_rating("  4.5 5 out of 5 Stars "), 4.5);
        assert_eq!(parser.parse_rating(".5"), 0.5);
        assert!(parser.parse_rating("").is_nan());
        assert!(parser.parse_rating("Stars 5").is_nan());
    }
}
