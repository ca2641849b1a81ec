//! 页面结构常量与选择器辅助函数
//!
//! 只支持一种固定的评价页布局

use scraper::{ElementRef, Selector};

use crate::error::{AppError, AppResult};

pub const REVIEW_WRAPPER_SELECTOR: &str = ".review-entry";
pub const TITLE_SELECTOR: &str = ".review-title";
pub const BODY_SELECTOR: &str = ".review-whole";
pub const DEALER_RATING_SELECTOR: &str = ".rating-static.visible-xs";
pub const EMPLOYEE_BLOCK_SELECTOR: &str = ".employees-wrapper .review-employee";
pub const EMPLOYEE_NAME_SELECTOR: &str = "a";
pub const EMPLOYEE_RATING_SELECTOR: &str = ".employee-rating-badge-sm span";
pub const NEXT_LINK_SELECTOR: &str = ".next a";

/// 编译 CSS 选择器，失败时返回解析错误而不是 panic
pub fn compile(selector: &str) -> AppResult<Selector> {
    Selector::parse(selector).map_err(|e| AppError::invalid_selector(selector, e))
}

/// 拼接 `scope` 内所有匹配元素的文本（按文档顺序）
///
/// 没有匹配时返回空字符串
pub fn select_text(scope: ElementRef<'_>, selector: &Selector) -> String {
    scope
        .select(selector)
        .flat_map(|el| el.text())
        .collect()
}
