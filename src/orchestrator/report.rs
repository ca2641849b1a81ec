//! 排名结果输出

use crate::config::OutputFormat;
use crate::error::AppResult;
use crate::models::DealerReview;

pub const TEXT_HEADER: &str = "Most positive reviews";

/// 按配置的格式渲染排名结果
pub fn render(reviews: &[DealerReview], format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(reviews)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reviews)?),
    }
}

/// 首行标题，之后每行 `序号: 分数 - 文本`，序号从 0 开始
pub fn render_text(reviews: &[DealerReview]) -> String {
    let mut out = String::from(TEXT_HEADER);
    for (i, review) in reviews.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!("{}: {} - {}", i, review.positivity_score, review.text));
    }
    out
}
