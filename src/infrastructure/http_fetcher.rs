//! 页面抓取器 - 基础设施层
//!
//! 持有唯一的 HTTP 客户端，只暴露"按 URL 取回页面内容"的能力

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, AppResult, FetchError};

/// 页面抓取能力
///
/// 非 2xx 状态与网络错误都以 `Err` 返回，不做重试。
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> AppResult<String>;
}

/// 基于 reqwest 的抓取器
///
/// 职责：
/// - 持有 HTTP 客户端
/// - 超时由客户端负责，爬取流程本身不设超时
/// - 不认识评价结构
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// 根据配置创建抓取器
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(FetchError::ClientBuildFailed)?;
        Ok(Self { client })
    }

    /// 使用已有客户端创建
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> AppResult<String> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::request_failed(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus {
                url: url.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::request_failed(url, e))?;
        debug!("GET {} -> {} ({} 字节)", url, status, body.len());

        Ok(body)
    }
}
