//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `review_pipeline` - 应用入口
//! - 创建抓取器与解析器，持有爬取流程
//! - 运行爬取并汇总统计
//!
//! ### `ranking` - 排名
//! - 五星筛选 + 正面度稳定降序 + 截取前 N 条
//!
//! ### `report` - 输出
//! - 文本或 JSON
//!
//! ## 层次关系
//!
//! ```text
//! review_pipeline (App)
//!     ↓
//! workflow::PaginationCrawler (逐页爬取)
//!     ↓
//! services (能力层：评价解析 / 员工评分 / 正面度 / 下一页)
//!     ↓
//! infrastructure (基础设施：PageFetcher)
//! ```

pub mod ranking;
pub mod report;
pub mod review_pipeline;

pub use ranking::rank_reviews;
pub use report::{render, render_text};
pub use review_pipeline::{App, RunSummary};
