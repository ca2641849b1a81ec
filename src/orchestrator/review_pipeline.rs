//! 评价处理管线 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：创建抓取器、解析器与爬取流程
//! 2. **爬取**：从配置的经销商页开始，按页预算串行抓取
//! 3. **排名**：筛选五星评价并按正面度排序
//! 4. **统计**：记录页数与评价数

use chrono::Local;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::{HttpFetcher, PageFetcher};
use crate::models::DealerReview;
use crate::orchestrator::ranking::rank_reviews;
use crate::services::{DealerReviewParser, NextLinkParser, NextLinkResolver, ReviewExtractor};
use crate::utils::logging::truncate_text;
use crate::workflow::PaginationCrawler;

/// 一次运行的结果
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub pages_fetched: u32,
    pub reviews_collected: usize,
    pub five_star_reviews: usize,
    /// 排名后的评价
    pub top_reviews: Vec<DealerReview>,
}

/// 应用主结构
pub struct App<F = HttpFetcher, X = DealerReviewParser, R = NextLinkParser> {
    config: Config,
    crawler: PaginationCrawler<F, X, R>,
}

impl App {
    /// 使用 HTTP 抓取器与默认解析器初始化应用
    pub fn initialize(config: Config) -> AppResult<Self> {
        let fetcher = HttpFetcher::new(&config)?;
        Self::with_fetcher(config, fetcher)
    }
}

impl<F: PageFetcher> App<F> {
    /// 使用自定义抓取器（如测试中的内存页面）
    pub fn with_fetcher(config: Config, fetcher: F) -> AppResult<Self> {
        let crawler = PaginationCrawler::new(
            config.root_url.clone(),
            fetcher,
            DealerReviewParser::new()?,
            NextLinkParser::new()?,
        )?;
        Ok(Self { config, crawler })
    }
}

impl<F, X, R> App<F, X, R>
where
    F: PageFetcher,
    X: ReviewExtractor,
    R: NextLinkResolver,
{
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> AppResult<RunSummary> {
        log_startup(&self.config);

        let report = self
            .crawler
            .crawl_with_report(
                Some(self.config.dealer_page.as_str()),
                Vec::new(),
                self.config.page_budget,
            )
            .await?;

        let reviews_collected = report.reviews.len();
        let five_star_reviews = report.reviews.iter().filter(|r| r.is_five_star()).count();
        if five_star_reviews == 0 {
            warn!("⚠️ 没有找到五星评价");
        }

        let top_reviews = rank_reviews(report.reviews, self.config.top_n);

        let summary = RunSummary {
            pages_fetched: report.pages_fetched,
            reviews_collected,
            five_star_reviews,
            top_reviews,
        };
        log_summary(&summary);

        Ok(summary)
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 开始爬取: {}{}", config.root_url, config.dealer_page);
    info!("📊 页数上限: {}, 输出条数: {}", config.page_budget, config.top_n);
    info!("{}", "=".repeat(60));
}

fn log_summary(summary: &RunSummary) {
    info!("{}", "=".repeat(60));
    info!("完成时间: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("📄 抓取页数: {}", summary.pages_fetched);
    info!("📝 评价总数: {}", summary.reviews_collected);
    info!("⭐ 五星评价: {}", summary.five_star_reviews);
    for (i, review) in summary.top_reviews.iter().enumerate() {
        info!("  {}. [{}] {}", i + 1, review.positivity_score, truncate_text(&review.text, 80));
    }
    info!("{}", "=".repeat(60));
}
