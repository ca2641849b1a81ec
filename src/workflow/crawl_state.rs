//! 分页爬取状态
//!
//! 封装"还能抓几页、下一页在哪、已经收集了哪些评价"这一信息

use crate::models::DealerReview;

/// 一次爬取在两步之间传递的状态
///
/// 评价列表按所有权转移，每一步只在末尾追加
#[derive(Debug, Clone, Default)]
pub struct CrawlState {
    /// 下一页路径，`None` 表示没有下一页
    pub page_path: Option<String>,
    /// 已收集的评价（页面顺序，页内按区块顺序）
    pub reviews: Vec<DealerReview>,
    /// 剩余可抓取页数
    pub remaining_pages: u32,
    /// 已抓取页数
    pub pages_fetched: u32,
}

impl CrawlState {
    pub fn new(
        page_path: Option<String>,
        reviews: Vec<DealerReview>,
        remaining_pages: u32,
    ) -> Self {
        Self {
            page_path,
            reviews,
            remaining_pages,
            pages_fetched: 0,
        }
    }

    /// 预算用尽或没有下一页时停止
    pub fn is_terminal(&self) -> bool {
        self.remaining_pages < 1 || self.page_path.is_none()
    }
}

/// 单步执行的结果
#[derive(Debug)]
pub enum CrawlStep {
    /// 已抓取一页，继续
    Continue(CrawlState),
    /// 终止，返回最终状态
    Stop(CrawlState),
}

/// 爬取汇总
#[derive(Debug, Clone, Default)]
pub struct CrawlReport {
    pub pages_fetched: u32,
    pub reviews: Vec<DealerReview>,
}

impl From<CrawlState> for CrawlReport {
    fn from(state: CrawlState) -> Self {
        Self {
            pages_fetched: state.pages_fetched,
            reviews: state.reviews,
        }
    }
}
