//! 下一页链接解析 - 业务能力层

use scraper::{Html, Selector};

use crate::error::AppResult;
use crate::services::markup::{self, NEXT_LINK_SELECTOR};

/// 下一页链接解析能力
pub trait NextLinkResolver: Send + Sync {
    /// 返回 href 原文（可能是相对路径，不做拼接）；没有下一页时返回 `None`
    fn resolve_next_link(&self, document: &Html) -> Option<String>;
}

pub struct NextLinkParser {
    next_anchor: Selector,
}

impl NextLinkParser {
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            next_anchor: markup::compile(NEXT_LINK_SELECTOR)?,
        })
    }
}

impl NextLinkResolver for NextLinkParser {
    fn resolve_next_link(&self, document: &Html) -> Option<String> {
        document
            .select(&self.next_anchor)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(str::to_string)
    }
}
