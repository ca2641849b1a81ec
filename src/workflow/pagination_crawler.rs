//! 分页爬取流程 - 流程层
//!
//! 流程顺序（每页）：
//! 1. 拼接 `base_url + page_path` 并抓取
//! 2. 解析评价区块 → 评价提取
//! 3. 追加到已收集列表
//! 4. 解析下一页链接，预算减一
//!
//! 预算用尽或没有下一页时停止。任一页抓取或解析失败都会中止整个爬取。

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

use crate::error::AppResult;
use crate::infrastructure::PageFetcher;
use crate::models::DealerReview;
use crate::services::markup::{self, REVIEW_WRAPPER_SELECTOR};
use crate::services::{NextLinkResolver, ReviewExtractor};
use crate::workflow::crawl_state::{CrawlReport, CrawlState, CrawlStep};

/// 分页爬取流程
///
/// - 严格串行：下一页地址依赖上一页内容
/// - 不缓存、不重试、不去重
/// - 抓取、提取、下一页解析三种能力均由外部注入
pub struct PaginationCrawler<F, X, R> {
    base_url: String,
    fetcher: F,
    extractor: X,
    resolver: R,
    review_wrapper: Selector,
}

impl<F, X, R> PaginationCrawler<F, X, R>
where
    F: PageFetcher,
    X: ReviewExtractor,
    R: NextLinkResolver,
{
    pub fn new(
        base_url: impl Into<String>,
        fetcher: F,
        extractor: X,
        resolver: R,
    ) -> AppResult<Self> {
        Ok(Self {
            base_url: base_url.into(),
            fetcher,
            extractor,
            resolver,
            review_wrapper: markup::compile(REVIEW_WRAPPER_SELECTOR)?,
        })
    }

    /// 爬取评价
    ///
    /// # 参数
    /// - `page_path`: 起始页路径，直接拼接在 `base_url` 之后
    /// - `accumulated`: 已有评价，新评价追加在其后
    /// - `page_budget`: 最多抓取的页数
    ///
    /// # 返回
    /// 返回全部评价
    pub async fn crawl(
        &self,
        page_path: Option<&str>,
        accumulated: Vec<DealerReview>,
        page_budget: u32,
    ) -> AppResult<Vec<DealerReview>> {
        let report = self
            .crawl_with_report(page_path, accumulated, page_budget)
            .await?;
        Ok(report.reviews)
    }

    /// 同 `crawl`，并返回抓取页数
    pub async fn crawl_with_report(
        &self,
        page_path: Option<&str>,
        accumulated: Vec<DealerReview>,
        page_budget: u32,
    ) -> AppResult<CrawlReport> {
        let mut state = CrawlState::new(page_path.map(str::to_string), accumulated, page_budget);

        loop {
            match self.step(state).await? {
                CrawlStep::Continue(next) => state = next,
                CrawlStep::Stop(done) => {
                    info!(
                        "✓ 爬取结束: 共 {} 页, {} 条评价",
                        done.pages_fetched,
                        done.reviews.len()
                    );
                    return Ok(done.into());
                }
            }
        }
    }

    /// 执行一步：终止判断 → 抓取 → 提取 → 决定下一步
    ///
    /// 终止状态下不发起任何请求
    pub async fn step(&self, state: CrawlState) -> AppResult<CrawlStep> {
        if state.is_terminal() {
            debug!(
                "停止: 剩余页数 {}, 下一页 {:?}",
                state.remaining_pages, state.page_path
            );
            return Ok(CrawlStep::Stop(state));
        }

        let CrawlState {
            page_path,
            mut reviews,
            remaining_pages,
            pages_fetched,
        } = state;
        let page_path = page_path.unwrap_or_default();

        let page_no = pages_fetched + 1;
        let url = format!("{}{}", self.base_url, page_path);
        info!("[第 {} 页] 🔍 抓取 {}", page_no, url);

        let content = self.fetcher.fetch(&url).await?;
        let (page_reviews, next_path) = self.process_page(&content)?;

        info!(
            "[第 {} 页] ✓ 解析到 {} 条评价, 下一页: {}",
            page_no,
            page_reviews.len(),
            next_path.as_deref().unwrap_or("无")
        );

        reviews.extend(page_reviews);

        Ok(CrawlStep::Continue(CrawlState {
            page_path: next_path,
            reviews,
            remaining_pages: remaining_pages - 1,
            pages_fetched: page_no,
        }))
    }

    /// 解析单页内容，文档不跨越 await
    fn process_page(&self, content: &str) -> AppResult<(Vec<DealerReview>, Option<String>)> {
        let document = Html::parse_document(content);
        let wrappers: Vec<ElementRef<'_>> = document.select(&self.review_wrapper).collect();
        debug!("找到 {} 个评价区块", wrappers.len());

        let reviews = self.extractor.extract_reviews(&wrappers)?;
        let next_path = self.resolver.resolve_next_link(&document);

        Ok((reviews, next_path))
    }
}
