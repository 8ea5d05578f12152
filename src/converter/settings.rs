//! 转换配置
//!
//! [`ConversionSettings`] 是转换器持有的完整默认值，
//! [`ConversionOptions`] 是单次调用时可选的部分覆盖。

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
use crate::error::Result;
use crate::hash::DEFAULT_ROUNDS;

/// 转换配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConversionSettings {
    /// 校验失败时在结果中报告的 rounds（默认 10）
    ///
    /// 只作为失败时的回退值，不会覆盖合法哈希中解析出的 rounds。
    pub rounds: u32,
    /// 严格模式：校验失败时返回错误而不是失败结果（默认 `true`）
    pub strict: bool,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            strict: true,
        }
    }
}

impl ConversionSettings {
    /// 严格模式配置（与默认值相同）
    pub fn strict() -> Self {
        Self::default()
    }

    /// 宽松模式配置：校验失败时返回 `success = false` 的结果
    pub fn lenient() -> Self {
        Self {
            strict: false,
            ..Self::default()
        }
    }

    /// 设置回退 rounds
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// 设置是否严格模式
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// 从 JSON 加载配置，缺省字段使用默认值
    ///
    /// # Example
    ///
    /// ```rust
    /// use bcrypt_compat::ConversionSettings;
    ///
    /// let settings = ConversionSettings::from_json(r#"{"strict": false}"#).unwrap();
    /// assert!(!settings.strict);
    /// assert_eq!(settings.rounds, 10);
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// 单次调用的配置覆盖
///
/// 未设置的字段沿用转换器的 [`ConversionSettings`]。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConversionOptions {
    /// 覆盖回退 rounds
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub rounds: Option<u32>,
    /// 覆盖严格模式
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub strict: Option<bool>,
}

impl ConversionOptions {
    /// 创建空的覆盖（全部沿用默认值）
    pub fn new() -> Self {
        Self::default()
    }

    /// 覆盖回退 rounds
    pub fn rounds(mut self, rounds: u32) -> Self {
        self.rounds = Some(rounds);
        self
    }

    /// 覆盖严格模式
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = Some(strict);
        self
    }

    /// 合并到基础配置之上
    pub fn merge_over(&self, base: &ConversionSettings) -> ConversionSettings {
        ConversionSettings {
            rounds: self.rounds.unwrap_or(base.rounds),
            strict: self.strict.unwrap_or(base.strict),
        }
    }

    /// 从 JSON 加载覆盖
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<ConversionSettings> for ConversionOptions {
    fn from(settings: ConversionSettings) -> Self {
        Self {
            rounds: Some(settings.rounds),
            strict: Some(settings.strict),
        }
    }
}
