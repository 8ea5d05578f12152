//! 哈希标签转换模块
//!
//! 将 PHP `password_hash` 生成的 `$2y$` 哈希改写为其他实现接受的 `$2b$` 形式。
//! `2a` 与 `2b` 原样返回。
//!
//! ## 严格模式与宽松模式
//!
//! - 严格模式（默认）：输入无效时返回 [`Error::InvalidHash`]
//! - 宽松模式：输入无效时返回 `success = false` 的 [`ConversionOutcome`]
//!
//! ## 示例
//!
//! ```rust
//! use bcrypt_compat::{ConversionOptions, HashConverter};
//!
//! let converter = HashConverter::default();
//!
//! let outcome = converter
//!     .convert("$2y$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy", None)
//!     .unwrap();
//! assert!(outcome.success);
//! assert_eq!(outcome.hash, "$2b$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy");
//!
//! // 严格模式下无效输入返回错误
//! assert!(converter.convert("invalid", None).is_err());
//!
//! // 宽松模式下返回失败结果
//! let options = ConversionOptions::new().strict(false);
//! let outcome = converter.convert("invalid", Some(&options)).unwrap();
//! assert!(!outcome.success);
//! assert_eq!(outcome.error.as_deref(), Some("Invalid PHP bcrypt hash format"));
//! ```

pub mod settings;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use settings::{ConversionOptions, ConversionSettings};

use crate::error::{Error, InvalidHashError, Result};
use crate::hash::{self, BcryptHash};

/// 转换结果
///
/// `success` 为 `true` 时 `hash` 满足哈希语法且其 rounds 字段等于 `rounds`；
/// 为 `false` 时 `hash` 为空字符串且 `error` 有值。
///
/// 反序列化时会检查上述约束，不满足时返回错误。
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawOutcome"))]
pub struct ConversionOutcome {
    /// 转换后的哈希，失败时为空
    pub hash: String,
    /// 解析出的 rounds，失败时为配置中的回退值
    pub rounds: u32,
    /// 是否成功
    pub success: bool,
    /// 失败原因
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub error: Option<String>,
}

impl ConversionOutcome {
    /// 成功结果
    pub fn succeeded(hash: &BcryptHash) -> Self {
        Self {
            hash: hash.to_string(),
            rounds: hash.rounds(),
            success: true,
            error: None,
        }
    }

    /// 失败结果，`rounds` 为回退值
    pub fn failed(rounds: u32, err: InvalidHashError) -> Self {
        Self {
            hash: String::new(),
            rounds,
            success: false,
            error: Some(err.to_string()),
        }
    }

    /// 是否成功
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// 转为 `Result`：成功时返回哈希，失败时返回对应的错误
    ///
    /// 错误种类由 `error` 的消息文本还原，无法识别的消息视为格式错误。
    pub fn into_result(self) -> Result<String> {
        if self.success {
            return Ok(self.hash);
        }
        let kind = self
            .error
            .as_deref()
            .and_then(InvalidHashError::from_message)
            .unwrap_or(InvalidHashError::InvalidFormat);
        Err(kind.into())
    }

    /// 检查结果是否满足成功 / 失败两种形态的约束
    pub fn check(&self) -> Result<()> {
        if self.success {
            let parsed = BcryptHash::parse(&self.hash)
                .map_err(|_| Error::config("successful outcome carries an invalid hash"))?;
            if parsed.rounds() != self.rounds {
                return Err(Error::config(format!(
                    "outcome rounds {} does not match hash rounds {}",
                    self.rounds,
                    parsed.rounds()
                )));
            }
            if self.error.is_some() {
                return Err(Error::config("successful outcome carries an error"));
            }
        } else {
            if !self.hash.is_empty() {
                return Err(Error::config("failed outcome carries a hash"));
            }
            if self.error.as_deref().is_none_or(str::is_empty) {
                return Err(Error::config("failed outcome is missing an error"));
            }
        }
        Ok(())
    }
}

/// 反序列化的中间形态，经 [`ConversionOutcome::check`] 检查后转换
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawOutcome {
    hash: String,
    rounds: u32,
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawOutcome> for ConversionOutcome {
    type Error = Error;

    fn try_from(raw: RawOutcome) -> Result<Self> {
        let outcome = ConversionOutcome {
            hash: raw.hash,
            rounds: raw.rounds,
            success: raw.success,
            error: raw.error,
        };
        outcome.check()?;
        Ok(outcome)
    }
}

/// 哈希标签转换器
///
/// 只持有只读的默认配置，可在多个线程间共享。
#[derive(Debug, Clone, Default)]
pub struct HashConverter {
    settings: ConversionSettings,
}

impl HashConverter {
    /// 使用指定默认配置创建转换器
    pub fn new(settings: ConversionSettings) -> Self {
        Self { settings }
    }

    /// 转换器的默认配置
    pub fn settings(&self) -> &ConversionSettings {
        &self.settings
    }

    /// 转换哈希标签
    ///
    /// `options` 合并到转换器默认配置之上。`options.rounds` 只影响失败时
    /// 报告的回退值，不会覆盖合法输入中的 rounds。
    ///
    /// # Errors
    ///
    /// 严格模式下输入无效时返回 [`Error::InvalidHash`]。
    pub fn convert(
        &self,
        candidate: &str,
        options: Option<&ConversionOptions>,
    ) -> Result<ConversionOutcome> {
        let settings = self.merged(options);
        self.finish(normalize(candidate), &settings)
    }

    /// 转换可能缺失的输入，`None` 按格式错误处理
    pub fn convert_optional(
        &self,
        candidate: Option<&str>,
        options: Option<&ConversionOptions>,
    ) -> Result<ConversionOutcome> {
        let settings = self.merged(options);
        let normalized = match candidate {
            Some(candidate) => normalize(candidate),
            None => Err(InvalidHashError::InvalidFormat),
        };
        self.finish(normalized, &settings)
    }

    /// 校验哈希标签
    pub fn is_valid_hash(&self, candidate: &str) -> bool {
        hash::is_valid_hash(candidate)
    }

    /// 尽力读取 rounds，失败时返回转换器配置的回退值
    pub fn get_rounds(&self, candidate: &str) -> u32 {
        hash::get_rounds_or(candidate, self.settings.rounds)
    }

    fn merged(&self, options: Option<&ConversionOptions>) -> ConversionSettings {
        options.map_or(self.settings, |options| options.merge_over(&self.settings))
    }

    fn finish(
        &self,
        normalized: std::result::Result<BcryptHash, InvalidHashError>,
        settings: &ConversionSettings,
    ) -> Result<ConversionOutcome> {
        match normalized {
            Ok(hash) => Ok(ConversionOutcome::succeeded(&hash)),
            Err(err) if settings.strict => {
                debug!(error = %err, "rejecting bcrypt hash in strict mode");
                Err(Error::InvalidHash(err))
            }
            Err(err) => {
                debug!(
                    error = %err,
                    fallback_rounds = settings.rounds,
                    "bcrypt hash conversion failed"
                );
                Ok(ConversionOutcome::failed(settings.rounds, err))
            }
        }
    }
}

/// 宽松核心：校验、拆分并归一化版本标识
fn normalize(candidate: &str) -> std::result::Result<BcryptHash, InvalidHashError> {
    let parsed = BcryptHash::parse(candidate)?;
    debug!(
        version = %parsed.version(),
        normalized = %parsed.version().normalized(),
        rounds = parsed.rounds(),
        "converting bcrypt hash"
    );
    Ok(parsed.into_normalized())
}

// ============================================================================
// 便捷函数
// ============================================================================

/// 使用默认配置（严格模式，回退 rounds 为 10）转换哈希
///
/// # Example
///
/// ```rust
/// use bcrypt_compat::convert;
///
/// let outcome = convert("$2y$12$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy").unwrap();
/// assert_eq!(outcome.rounds, 12);
/// assert!(outcome.hash.starts_with("$2b$12$"));
/// ```
pub fn convert(candidate: &str) -> Result<ConversionOutcome> {
    HashConverter::default().convert(candidate, None)
}

/// 使用自定义覆盖转换哈希
pub fn convert_with(candidate: &str, options: &ConversionOptions) -> Result<ConversionOutcome> {
    HashConverter::default().convert(candidate, Some(options))
}
