use std::fmt;

#[derive(Debug, Clone)]
pub enum QuickLinkError {
    Config(String),
    StorageBackendNotFound(String),
    StorageRead(String),
    StorageWrite(String),
    Serialization(String),
    Validation(String),
    Logging(String),
}

impl QuickLinkError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            QuickLinkError::Config(_) => "E001",
            QuickLinkError::StorageBackendNotFound(_) => "E002",
            QuickLinkError::StorageRead(_) => "E003",
            QuickLinkError::StorageWrite(_) => "E004",
            QuickLinkError::Serialization(_) => "E005",
            QuickLinkError::Validation(_) => "E006",
            QuickLinkError::Logging(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            QuickLinkError::Config(_) => "Configuration Error",
            QuickLinkError::StorageBackendNotFound(_) => "Storage Backend Not Found",
            QuickLinkError::StorageRead(_) => "Storage Read Error",
            QuickLinkError::StorageWrite(_) => "Storage Write Error",
            QuickLinkError::Serialization(_) => "Serialization Error",
            QuickLinkError::Validation(_) => "Validation Error",
            QuickLinkError::Logging(_) => "Logging Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            QuickLinkError::Config(msg)
            | QuickLinkError::StorageBackendNotFound(msg)
            | QuickLinkError::StorageRead(msg)
            | QuickLinkError::StorageWrite(msg)
            | QuickLinkError::Serialization(msg)
            | QuickLinkError::Validation(msg)
            | QuickLinkError::Logging(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for QuickLinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for QuickLinkError {}

// 便捷的构造函数
impl QuickLinkError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        QuickLinkError::Config(msg.into())
    }

    pub fn storage_backend_not_found<T: Into<String>>(msg: T) -> Self {
        QuickLinkError::StorageBackendNotFound(msg.into())
    }

    pub fn storage_read<T: Into<String>>(msg: T) -> Self {
        QuickLinkError::StorageRead(msg.into())
    }

    pub fn storage_write<T: Into<String>>(msg: T) -> Self {
        QuickLinkError::StorageWrite(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        QuickLinkError::Serialization(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        QuickLinkError::Validation(msg.into())
    }

    pub fn logging<T: Into<String>>(msg: T) -> Self {
        QuickLinkError::Logging(msg.into())
    }
}

impl From<std::io::Error> for QuickLinkError {
    fn from(err: std::io::Error) -> Self {
        QuickLinkError::StorageWrite(err.to_string())
    }
}

impl From<serde_json::Error> for QuickLinkError {
    fn from(err: serde_json::Error) -> Self {
        QuickLinkError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for QuickLinkError {
    fn from(err: config::ConfigError) -> Self {
        QuickLinkError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, QuickLinkError>;
