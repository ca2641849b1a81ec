/// 日志工具模块
///
/// 提供日志初始化与格式化辅助函数
use tracing_subscriber::EnvFilter;

const CRATE_TARGET: &str = "dealer_review_scraper";

/// 初始化全局日志，输出到 stderr
///
/// `RUST_LOG` 优先；否则默认 `info`，`verbose` 时本 crate 为 `debug`。
/// 重复调用不会报错。
///
/// # 参数
/// - `verbose`: 是否显示详细日志
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(default_filter(verbose))
        .with_writer(std::io::stderr)
        .try_init();
}

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new(format!("info,{}=debug", CRATE_TARGET))
        } else {
            EnvFilter::new("info")
        }
    })
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
