//! # Dealer Review Scraper
//!
//! 抓取经销商评价列表页，解析评价与员工评分，计算正面度并给出最正面的五星评价
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有 HTTP 客户端，只暴露抓取能力
//! - `PageFetcher` / `HttpFetcher`
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 每个模块只做一件事，只处理单页内容
//! - `EmployeeRatingParser` - 员工评分
//! - `DealerReviewParser` - 评价（文本、星级、员工、正面度）
//! - `PositivityScorer` - 正面度评分
//! - `NextLinkParser` - 下一页链接
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义逐页爬取的状态机
//! - `CrawlState` / `CrawlStep` - 状态与单步结果
//! - `PaginationCrawler` - 抓取 → 提取 → 下一页 → 预算减一
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/review_pipeline` - 应用入口
//! - `orchestrator/ranking` - 五星筛选与排序
//! - `orchestrator/report` - 输出
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::{Config, OutputFormat};
pub use error::{AppError, AppResult};
pub use infrastructure::{HttpFetcher, PageFetcher};
pub use models::{DealerReview, EmployeeRating};
pub use orchestrator::{rank_reviews, App, RunSummary};
pub use services::{
    DealerReviewParser, EmployeeRatingExtractor, EmployeeRatingParser, NextLinkParser,
    NextLinkResolver, PositivityScorer, ReviewExtractor,
};
pub use workflow::{CrawlReport, CrawlState, CrawlStep, PaginationCrawler};
