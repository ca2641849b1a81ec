use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use dealer_review_scraper::error::{FetchError, ParseError};
use dealer_review_scraper::orchestrator::report;
use dealer_review_scraper::utils::logging;
use dealer_review_scraper::{
    App, AppError, AppResult, Config, DealerReviewParser, NextLinkParser, PageFetcher,
    PaginationCrawler,
};

const ROOT: &str = "https://reviews.test";
const DEALER: &str = "/dealer/test-reviews/";

/// 从内存中返回页面的抓取器，记录请求顺序
struct InMemoryFetcher {
    pages: HashMap<String, &'static str>,
    requested: Mutex<Vec<String>>,
}

impl InMemoryFetcher {
    fn new(pages: &[(&str, &'static str)]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|(path, html)| (format!("{}{}", ROOT, path), *html))
                .collect(),
            requested: Mutex::new(Vec::new()),
        }
    }

    fn site() -> Self {
        Self::new(&[
            (DEALER, include_str!("fixtures/page1.html")),
            ("/dealer/test-reviews/page2/", include_str!("fixtures/page2.html")),
            ("/dealer/test-reviews/page3/", include_str!("fixtures/page3.html")),
            ("/dealer/test-reviews/page4/", include_str!("fixtures/page4.html")),
        ])
    }

    fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for InMemoryFetcher {
    async fn fetch(&self, url: &str) -> AppResult<String> {
        self.requested.lock().unwrap().push(url.to_string());
        match self.pages.get(url) {
            Some(html) => Ok(html.to_string()),
            None => Err(FetchError::BadStatus {
                url: url.to_string(),
                status: 404,
            }
            .into()),
        }
    }
}

fn test_config(page_budget: u32) -> Config {
    Config {
        root_url: ROOT.to_string(),
        dealer_page: DEALER.to_string(),
        page_budget,
        ..Config::default()
    }
}

fn site_crawler(
    fetcher: InMemoryFetcher,
) -> PaginationCrawler<InMemoryFetcher, DealerReviewParser, NextLinkParser> {
    PaginationCrawler::new(
        ROOT,
        fetcher,
        DealerReviewParser::new().unwrap(),
        NextLinkParser::new().unwrap(),
    )
    .unwrap()
}

#[tokio::test]
async fn test_pipeline_ranks_top_five_star_reviews() {
    let app = App::with_fetcher(test_config(3), InMemoryFetcher::site()).unwrap();
    let summary = app.run().await.unwrap();

    assert_eq!(summary.pages_fetched, 3);
    assert_eq!(summary.reviews_collected, 5);
    assert_eq!(summary.five_star_reviews, 4);

    let ranked: Vec<(u32, &str)> = summary
        .top_reviews
        .iter()
        .map(|r| (r.positivity_score, r.text.as_str()))
        .collect();
    assert_eq!(
        ranked,
        vec![
            (
                6,
                "Wonderful They went above and beyond, very attentive and personable."
            ),
            (3, "Best dealer Great staff."),
            (3, "Impeccable Impressed by the impeccable service."),
        ]
    );
}

#[tokio::test]
async fn test_page_budget_stops_before_last_page() {
    let crawler = site_crawler(InMemoryFetcher::site());
    let reviews = crawler.crawl(Some(DEALER), Vec::new(), 3).await.unwrap();

    assert_eq!(reviews.len(), 5);
    assert!(reviews.iter().all(|r| !r.text.starts_with("Best best")));
}

#[tokio::test]
async fn test_crawl_follows_next_links_in_order() {
    let fetcher = InMemoryFetcher::site();
    let crawler = site_crawler(fetcher);
    let report = crawler
        .crawl_with_report(Some(DEALER), Vec::new(), 10)
        .await
        .unwrap();

    // 第 4 页没有下一页链接，预算未用完也会停止
    assert_eq!(report.pages_fetched, 4);
    assert_eq!(report.reviews.len(), 6);
}

#[tokio::test]
async fn test_reviews_keep_page_then_wrapper_order() {
    let crawler = site_crawler(InMemoryFetcher::site());
    let reviews = crawler.crawl(Some(DEALER), Vec::new(), 2).await.unwrap();

    let stars: Vec<u8> = reviews.iter().map(|r| r.stars).collect();
    assert_eq!(stars, vec![5, 4, 5, 5]);
    assert_eq!(reviews[0].employee_ratings[0].name, "Jane Doe");
    assert_eq!(reviews[2].employee_ratings.len(), 2);
}

#[tokio::test]
async fn test_unparseable_employee_rating_does_not_fail() {
    let crawler = site_crawler(InMemoryFetcher::site());
    let reviews = crawler.crawl(Some(DEALER), Vec::new(), 3).await.unwrap();

    let last = reviews.last().unwrap();
    assert_eq!(last.employee_ratings[0].name, "Cy Fox");
    assert!(last.employee_ratings[0].rating.is_nan());
    assert_eq!(last.positivity_score, 3);
}

#[tokio::test]
async fn test_positivity_score_is_reproducible() {
    let parser = DealerReviewParser::new().unwrap();
    let crawler = site_crawler(InMemoryFetcher::site());
    let reviews = crawler.crawl(Some(DEALER), Vec::new(), 4).await.unwrap();

    for review in &reviews {
        assert_eq!(review.positivity_score, parser.scorer().score_review(review));
    }
}

#[tokio::test]
async fn test_missing_page_aborts_whole_crawl() {
    let fetcher = InMemoryFetcher::new(&[(DEALER, include_str!("fixtures/page1.html"))]);
    let crawler = site_crawler(fetcher);

    let err = crawler.crawl(Some(DEALER), Vec::new(), 3).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::Fetch(FetchError::BadStatus { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_malformed_page_aborts_whole_crawl() {
    let fetcher = InMemoryFetcher::new(&[(DEALER, include_str!("fixtures/malformed.html"))]);
    let crawler = site_crawler(fetcher);

    let err = crawler.crawl(Some(DEALER), Vec::new(), 3).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::Parse(ParseError::MissingStarRating { index: 0 })
    ));
}

#[tokio::test]
async fn test_text_report_of_ranked_reviews() {
    let app = App::with_fetcher(test_config(3), InMemoryFetcher::site()).unwrap();
    let summary = app.run().await.unwrap();

    let text = report::render_text(&summary.top_reviews);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Most positive reviews");
    assert_eq!(lines[2], "1: 3 - Best dealer Great staff.");
    assert_eq!(lines.len(), 4);
}

/// 访问真实站点，需要设置 URL 与 DEALER
///
/// 运行方式：
/// ```bash
/// URL=https://www.dealerrater.com DEALER=/dealer/...-dealer-reviews-23685/ cargo test test_live_crawl -- --ignored --nocapture
/// ```
#[tokio::test]
#[ignore]
async fn test_live_crawl() {
    logging::init(true);

    let config = Config::from_env().expect("需要设置 URL 与 DEALER");
    let app = App::initialize(config).expect("初始化应用失败");
    let summary = app.run().await.expect("爬取失败");

    println!("{}", report::render_text(&summary.top_reviews));
    assert!(summary.pages_fetched >= 1);
}
