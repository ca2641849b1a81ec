//! 经销商评价解析 - 业务能力层
//!
//! 把每个评价区块解析为完整的 `DealerReview`：
//! 1. 标题 + 正文
//! 2. 星级（class 中的 `rating-<数字>`，数值必须是 10–50 之间 10 的整数倍）
//! 3. 员工评分（委托给 `EmployeeRatingExtractor`）
//! 4. 正面度评分

use regex::Regex;
use scraper::{ElementRef, Selector};
use tracing::debug;

use crate::error::{AppResult, ParseError};
use crate::models::DealerReview;
use crate::services::employee_rating_parser::{EmployeeRatingExtractor, EmployeeRatingParser};
use crate::services::markup::{
    self, BODY_SELECTOR, DEALER_RATING_SELECTOR, EMPLOYEE_BLOCK_SELECTOR, TITLE_SELECTOR,
};
use crate::services::positivity_scorer::PositivityScorer;

/// 星级标记类名，不含数值
const STATIC_RATING_CLASS: &str = "rating-static";

/// 评价提取能力
pub trait ReviewExtractor: Send + Sync {
    /// 输出顺序与输入区块一致；任一区块缺少星级标记即整体失败
    fn extract_reviews(&self, wrappers: &[ElementRef<'_>]) -> AppResult<Vec<DealerReview>>;
}

/// 默认的评价解析器
pub struct DealerReviewParser<E = EmployeeRatingParser> {
    employee_extractor: E,
    scorer: PositivityScorer,
    title: Selector,
    body: Selector,
    dealer_rating: Selector,
    employee_block: Selector,
    star_token: Regex,
}

impl DealerReviewParser<EmployeeRatingParser> {
    pub fn new() -> AppResult<Self> {
        Self::with_employee_extractor(EmployeeRatingParser::new()?)
    }
}

impl<E: EmployeeRatingExtractor> DealerReviewParser<E> {
    /// 使用自定义的员工评分提取器（测试中可替换）
    pub fn with_employee_extractor(employee_extractor: E) -> AppResult<Self> {
        Ok(Self {
            employee_extractor,
            scorer: PositivityScorer::new()?,
            title: markup::compile(TITLE_SELECTOR)?,
            body: markup::compile(BODY_SELECTOR)?,
            dealer_rating: markup::compile(DEALER_RATING_SELECTOR)?,
            employee_block: markup::compile(EMPLOYEE_BLOCK_SELECTOR)?,
            star_token: Regex::new(r"^rating-(\d+)$")?,
        })
    }

    pub fn scorer(&self) -> &PositivityScorer {
        &self.scorer
    }

    /// 解析单条评价
    ///
    /// # 参数
    /// - `index`: 区块在本页中的序号（仅用于错误信息）
    /// - `wrapper`: 评价区块
    pub fn parse_review(&self, index: usize, wrapper: ElementRef<'_>) -> AppResult<DealerReview> {
        let title = markup::select_text(wrapper, &self.title);
        let body = markup::select_text(wrapper, &self.body);
        let text = DealerReview::join_text(&title, &body);

        let stars = self.parse_stars(index, wrapper)?;

        let blocks: Vec<ElementRef<'_>> = wrapper.select(&self.employee_block).collect();
        let employee_ratings = self.employee_extractor.extract_employee_ratings(&blocks);

        let positivity_score = self.scorer.score(&text, &employee_ratings);

        Ok(DealerReview {
            text,
            stars,
            employee_ratings,
            positivity_score,
        })
    }

    fn parse_stars(&self, index: usize, wrapper: ElementRef<'_>) -> AppResult<u8> {
        let element = wrapper
            .select(&self.dealer_rating)
            .next()
            .ok_or(ParseError::MissingStarRating { index })?;

        let (token, digits) = element
            .value()
            .classes()
            .filter(|c| *c != STATIC_RATING_CLASS)
            .find_map(|c| {
                self.star_token
                    .captures(c)
                    .and_then(|caps| caps.get(1))
                    .map(|d| (c, d.as_str()))
            })
            .ok_or(ParseError::MissingStarRating { index })?;

        let malformed = || ParseError::MalformedStarRating {
            index,
            token: token.to_string(),
        };
        let value: u32 = digits.parse().map_err(|_| malformed())?;
        if value % 10 != 0 || !(10..=50).contains(&value) {
            return Err(malformed().into());
        }

        Ok((value / 10) as u8)
    }
}

impl<E: EmployeeRatingExtractor> ReviewExtractor for DealerReviewParser<E> {
    fn extract_reviews(&self, wrappers: &[ElementRef<'_>]) -> AppResult<Vec<DealerReview>> {
        let reviews = wrappers
            .iter()
            .enumerate()
            .map(|(i, w)| self.parse_review(i, *w))
            .collect::<AppResult<Vec<_>>>()?;
        debug!("解析到 {} 条评价", reviews.len());
        Ok(reviews)
    }
}
