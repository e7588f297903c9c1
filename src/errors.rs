use std::fmt;

#[derive(Debug, Clone)]
pub enum TableShuffleError {
    Config(String),
    Validation(String),
    Logging(String),
    Terminal(String),
}

impl TableShuffleError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            TableShuffleError::Config(_) => "E001",
            TableShuffleError::Validation(_) => "E002",
            TableShuffleError::Logging(_) => "E003",
            TableShuffleError::Terminal(_) => "E004",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            TableShuffleError::Config(_) => "Configuration Error",
            TableShuffleError::Validation(_) => "Validation Error",
            TableShuffleError::Logging(_) => "Logging Error",
            TableShuffleError::Terminal(_) => "Terminal Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            TableShuffleError::Config(msg) => msg,
            TableShuffleError::Validation(msg) => msg,
            TableShuffleError::Logging(msg) => msg,
            TableShuffleError::Terminal(msg) => msg,
        }
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 带错误代码前缀的格式，用于 stderr 输出
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code(), self.format_simple())
    }
}

impl fmt::Display for TableShuffleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for TableShuffleError {}

// 便捷的构造函数
impl TableShuffleError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        TableShuffleError::Config(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        TableShuffleError::Validation(msg.into())
    }

    pub fn logging<T: Into<String>>(msg: T) -> Self {
        TableShuffleError::Logging(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        TableShuffleError::Terminal(msg.into())
    }
}

impl From<std::io::Error> for TableShuffleError {
    fn from(err: std::io::Error) -> Self {
        TableShuffleError::Terminal(err.to_string())
    }
}

impl From<config::ConfigError> for TableShuffleError {
    fn from(err: config::ConfigError) -> Self {
        TableShuffleError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for TableShuffleError {
    fn from(err: toml::ser::Error) -> Self {
        TableShuffleError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TableShuffleError>;
