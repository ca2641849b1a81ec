use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 页面抓取错误
    #[error("抓取错误: {0}")]
    Fetch(#[from] FetchError),
    /// 页面解析错误
    #[error("解析错误: {0}")]
    Parse(#[from] ParseError),
    /// 文件读写错误
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
    /// JSON 序列化错误
    #[error("JSON错误: {0}")]
    Json(#[from] serde_json::Error),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量不存在
    #[error("环境变量 {var_name} 不存在")]
    EnvVarNotFound { var_name: String },
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    FileReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 页面抓取错误
#[derive(Debug, Error)]
pub enum FetchError {
    /// 网络请求失败
    #[error("请求失败 ({url}): {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// 服务器返回非 2xx 状态码
    #[error("服务器返回错误状态 ({url}): {status}")]
    BadStatus { url: String, status: u16 },
    /// 创建 HTTP 客户端失败
    #[error("创建 HTTP 客户端失败: {0}")]
    ClientBuildFailed(#[source] reqwest::Error),
}

/// 页面解析错误
#[derive(Debug, Error)]
pub enum ParseError {
    /// CSS 选择器无效
    #[error("无效的选择器 '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
    /// 正则表达式无效
    #[error("无效的正则表达式: {0}")]
    InvalidPattern(#[from] regex::Error),
    /// 评价中找不到星级 class
    #[error("第 {index} 条评价缺少星级标记")]
    MissingStarRating { index: usize },
    /// 星级 class 数值超出范围
    #[error("第 {index} 条评价的星级标记无效: {token}")]
    MalformedStarRating { index: usize, token: String },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建环境变量缺失错误
    pub fn env_var_not_found(var_name: impl Into<String>) -> Self {
        AppError::Config(ConfigError::EnvVarNotFound {
            var_name: var_name.into(),
        })
    }

    /// 创建请求失败错误
    pub fn request_failed(url: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Fetch(FetchError::RequestFailed {
            url: url.into(),
            source,
        })
    }

    /// 创建选择器无效错误
    pub fn invalid_selector(selector: impl Into<String>, message: impl ToString) -> Self {
        AppError::Parse(ParseError::InvalidSelector {
            selector: selector.into(),
            message: message.to_string(),
        })
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Parse(ParseError::InvalidPattern(err))
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
