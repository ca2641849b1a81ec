use crate::error::{AppError, AppResult, ConfigError};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// 结果输出格式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 每行一条评价
    #[default]
    Text,
    /// JSON 数组
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 站点根地址
    pub root_url: String,
    /// 经销商评价页路径（以 `/` 开头）
    pub dealer_page: String,
    /// 最多抓取的页数
    pub page_budget: u32,
    /// 输出的评价条数
    pub top_n: usize,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 请求头 User-Agent
    pub user_agent: String,
    /// 输出格式
    pub output_format: OutputFormat,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_url: String::new(),
            dealer_page: String::new(),
            page_budget: 3,
            top_n: 3,
            request_timeout_secs: 30,
            user_agent: concat!("dealer_review_scraper/", env!("CARGO_PKG_VERSION")).to_string(),
            output_format: OutputFormat::Text,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从进程环境变量加载配置
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 按 默认值 → `CONFIG_FILE` 指向的 TOML → 环境变量 的顺序合并配置
    ///
    /// # 参数
    /// - `lookup`: 环境变量查询函数
    ///
    /// # 返回
    /// 缺少 `URL` 或 `DEALER` 时返回配置错误
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup("CONFIG_FILE") {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Some(v) = lookup("URL") {
            config.root_url = v;
        }
        if let Some(v) = lookup("DEALER") {
            config.dealer_page = v;
        }
        if let Some(v) = lookup("USER_AGENT") {
            config.user_agent = v;
        }
        config.page_budget = parse_var(&lookup, "PAGE_BUDGET", "u32", config.page_budget)?;
        config.top_n = parse_var(&lookup, "TOP_N", "usize", config.top_n)?;
        config.request_timeout_secs = parse_var(
            &lookup,
            "REQUEST_TIMEOUT_SECS",
            "u64",
            config.request_timeout_secs,
        )?;
        config.output_format =
            parse_var(&lookup, "OUTPUT_FORMAT", "text|json", config.output_format)?;
        config.verbose_logging =
            parse_var(&lookup, "VERBOSE_LOGGING", "bool", config.verbose_logging)?;

        config.validate()?;
        Ok(config)
    }

    /// 从 TOML 文件读取配置，未出现的字段使用默认值
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileReadFailed {
            path: display.clone(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: display,
            source,
        })?;
        Ok(config)
    }

    fn validate(&self) -> AppResult<()> {
        if self.root_url.is_empty() {
            return Err(AppError::env_var_not_found("URL"));
        }
        if self.dealer_page.is_empty() {
            return Err(AppError::env_var_not_found("DEALER"));
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, var_name: &str, expected_type: &str, fallback: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var_name) {
        None => Ok(fallback),
        Some(value) => value.trim().parse().map_err(|_| {
            ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }
            .into()
        }),
    }
}
