use anyhow::{Context, Result};
use dealer_review_scraper::orchestrator::report;
use dealer_review_scraper::utils::logging;
use dealer_review_scraper::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置（缺少 URL / DEALER 时直接退出，不发起任何请求）
    let config = Config::from_env().context("加载配置失败")?;

    // 初始化日志
    logging::init(config.verbose_logging);

    let format = config.output_format;
    let app = App::initialize(config).context("初始化应用失败")?;
    let summary = app.run().await.context("爬取评价失败")?;

    println!("{}", report::render(&summary.top_reviews, format)?);

    Ok(())
}
