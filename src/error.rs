//! 统一错误类型模块
//!
//! 提供 bcrypt-compat 中所有操作的错误类型定义。

use thiserror::Error;

/// bcrypt-compat 的统一结果类型
pub type Result<T> = std::result::Result<T, Error>;

/// bcrypt-compat 的错误类型
#[derive(Debug, Error)]
pub enum Error {
    /// 哈希格式或 rounds 无效
    #[error(transparent)]
    InvalidHash(#[from] InvalidHashError),

    /// 配置解析失败
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// 创建一个配置错误
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// 是否为哈希校验失败
    pub fn is_invalid_hash(&self) -> bool {
        matches!(self, Error::InvalidHash(_))
    }

    /// 取出内部的哈希校验错误
    pub fn invalid_hash(&self) -> Option<&InvalidHashError> {
        match self {
            Error::InvalidHash(e) => Some(e),
            Error::Config(_) => None,
        }
    }
}

/// 哈希校验错误
///
/// `Display` 输出是固定的消息文本，非严格模式下同样的文本会写入
/// [`ConversionOutcome::error`](crate::ConversionOutcome::error)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidHashError {
    /// 不符合 `$2[aby]$DD$<53 chars>` 语法，或 rounds 不在 4-31
    #[error("Invalid PHP bcrypt hash format")]
    InvalidFormat,

    /// 拆分后的 rounds 字段无效
    #[error("Invalid rounds value in hash")]
    InvalidRounds,
}

impl InvalidHashError {
    /// 所有错误种类
    pub const ALL: [InvalidHashError; 2] = [
        InvalidHashError::InvalidFormat,
        InvalidHashError::InvalidRounds,
    ];

    /// 根据固定的消息文本还原错误种类
    pub fn from_message(message: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.to_string() == message)
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_hash_messages() {
        assert_eq!(
            InvalidHashError::InvalidFormat.to_string(),
            "Invalid PHP bcrypt hash format"
        );
        assert_eq!(
            InvalidHashError::InvalidRounds.to_string(),
            "Invalid rounds value in hash"
        );
    }

    #[test]
    fn test_from_message() {
        for kind in InvalidHashError::ALL {
            assert_eq!(InvalidHashError::from_message(&kind.to_string()), Some(kind));
        }
        assert_eq!(InvalidHashError::from_message("something else"), None);
    }

    #[test]
    fn test_error_display_is_transparent() {
        let err: Error = InvalidHashError::InvalidFormat.into();
        assert_eq!(err.to_string(), "Invalid PHP bcrypt hash format");
        assert!(err.is_invalid_hash());
        assert_eq!(err.invalid_hash(), Some(&InvalidHashError::InvalidFormat));
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("missing field");
        assert_eq!(err.to_string(), "Config error: missing field");
        assert!(!err.is_invalid_hash());
        assert!(err.invalid_hash().is_none());
    }
}
