//! URL 验证模块
//!
//! 短链接表单的前置校验：只接受带 scheme 和 host 的绝对 URL。
//! `LinkStore` itself accepts any string; callers run this first.

use url::Url;

#[derive(Debug, PartialEq, Eq)]
pub enum UrlValidationError {
    EmptyUrl,
    InvalidFormat(String),
    MissingHost(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL cannot be empty"),
            Self::InvalidFormat(msg) => write!(f, "Invalid URL format: {}", msg),
            Self::MissingHost(scheme) => {
                write!(f, "URL with scheme '{}' has no host", scheme)
            }
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// 验证 URL
///
/// 1. URL 不为空
/// 2. 可解析为绝对 URL
/// 3. 包含 host
pub fn validate_url(url: &str) -> Result<Url, UrlValidationError> {
    let url = url.trim();

    if url.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    let parsed = Url::parse(url).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    if !parsed.has_host() || parsed.host_str().is_some_and(str::is_empty) {
        return Err(UrlValidationError::MissingHost(parsed.scheme().to_string()));
    }

    Ok(parsed)
}

/// 获取 URL 验证错误的用户友好消息
pub fn validation_error_message(_error: &UrlValidationError) -> &'static str {
    "❌ Invalid URL"
}
