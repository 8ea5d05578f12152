//! bcrypt 哈希标签的语法校验与解析
//!
//! 标签结构为 `$<version>$<rounds>$<salt+digest>`，总长度固定 60 个字符。

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::version::BcryptVersion;
use crate::error::InvalidHashError;

/// bcrypt 允许的最小 cost
pub const MIN_ROUNDS: u32 = 4;

/// bcrypt 允许的最大 cost
pub const MAX_ROUNDS: u32 = 31;

/// 无法解析 rounds 时使用的默认值
pub const DEFAULT_ROUNDS: u32 = 10;

/// 完整哈希标签长度
pub const HASH_LEN: usize = 60;

/// salt + digest 的长度
pub const BODY_LEN: usize = 53;

/// body 中 salt 部分的长度
pub const SALT_LEN: usize = 22;

/// body 中 digest 部分的长度
pub const DIGEST_LEN: usize = BODY_LEN - SALT_LEN;

// `[0-9]` 而不是 `\d`：regex 的 `\d` 匹配所有 Unicode 数字
static HASH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\$2[aby]\$([0-9]{2})\$[./A-Za-z0-9]{53}$").expect("bcrypt hash pattern is valid")
});

/// rounds 是否在 bcrypt 定义的 4-31 范围内
pub fn is_valid_rounds(rounds: u32) -> bool {
    (MIN_ROUNDS..=MAX_ROUNDS).contains(&rounds)
}

/// 校验哈希标签
///
/// 语法为 `$2[aby]$DD$[A-Za-z0-9./]{53}`，且 rounds 在 4-31 之间时返回 `true`。
///
/// # Example
///
/// ```rust
/// use bcrypt_compat::is_valid_hash;
///
/// assert!(is_valid_hash("$2y$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy"));
/// assert!(!is_valid_hash("$2y$10$tooshort"));
/// assert!(!is_valid_hash("$2y$03$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy"));
/// ```
pub fn is_valid_hash(candidate: &str) -> bool {
    if candidate.len() != HASH_LEN {
        return false;
    }
    HASH_PATTERN
        .captures(candidate)
        .and_then(|caps| caps.get(1))
        .and_then(|rounds| rounds.as_str().parse::<u32>().ok())
        .is_some_and(is_valid_rounds)
}

/// 尽力读取 rounds 字段，失败时返回 [`DEFAULT_ROUNDS`]
///
/// # Example
///
/// ```rust
/// use bcrypt_compat::get_rounds;
///
/// assert_eq!(get_rounds("$2y$12$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy"), 12);
/// assert_eq!(get_rounds("invalid"), 10);
/// ```
pub fn get_rounds(candidate: &str) -> u32 {
    get_rounds_or(candidate, DEFAULT_ROUNDS)
}

/// 尽力读取 rounds 字段，失败时返回 `fallback`
///
/// 只读取第二个与第三个 `$` 之间的两位数字，不做完整校验，
/// 因此超出 4-31 的数值也会原样返回。字段不是恰好两位 ASCII 数字时返回 `fallback`。
pub fn get_rounds_or(candidate: &str, fallback: u32) -> u32 {
    let mut fields = candidate.splitn(4, '$');
    let (Some(""), Some(_version), Some(rounds), Some(_body)) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return fallback;
    };

    if rounds.len() != 2 || !rounds.bytes().all(|b| b.is_ascii_digit()) {
        return fallback;
    }
    rounds.parse().unwrap_or(fallback)
}

/// 是否需要转换（合法的 `2y` 哈希）
pub fn needs_conversion(candidate: &str) -> bool {
    BcryptHash::parse(candidate).is_ok_and(|hash| hash.version().is_php_variant())
}

/// 经过校验的 bcrypt 哈希标签
///
/// 只能通过 [`BcryptHash::parse`] 构造，因此字段总是满足语法约束。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BcryptHash {
    version: BcryptVersion,
    rounds: u32,
    body: String,
}

impl BcryptHash {
    /// 解析并校验哈希标签
    ///
    /// 语法校验失败返回 [`InvalidHashError::InvalidFormat`]；
    /// 拆分后 rounds 复查失败返回 [`InvalidHashError::InvalidRounds`]。
    ///
    /// # Example
    ///
    /// ```rust
    /// use bcrypt_compat::{BcryptHash, BcryptVersion};
    ///
    /// let hash = BcryptHash::parse("$2y$08$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy").unwrap();
    /// assert_eq!(hash.version(), BcryptVersion::TwoY);
    /// assert_eq!(hash.rounds(), 8);
    /// assert_eq!(hash.salt(), "N9qo8uLOickgx2ZMRZoMye");
    /// ```
    pub fn parse(candidate: &str) -> Result<Self, InvalidHashError> {
        if !is_valid_hash(candidate) {
            return Err(InvalidHashError::InvalidFormat);
        }
        Self::from_fields(candidate)
    }

    // 语法已经限定 rounds 为两位数字，这里的范围复查与之重叠
    fn from_fields(candidate: &str) -> Result<Self, InvalidHashError> {
        let mut fields = candidate.splitn(4, '$');
        let (Some(""), Some(version), Some(rounds), Some(body)) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(InvalidHashError::InvalidFormat);
        };

        let version = version.parse::<BcryptVersion>()?;
        let rounds = rounds
            .parse::<u32>()
            .ok()
            .filter(|r| is_valid_rounds(*r))
            .ok_or(InvalidHashError::InvalidRounds)?;

        Ok(Self {
            version,
            rounds,
            body: body.to_string(),
        })
    }

    /// 版本标识
    pub fn version(&self) -> BcryptVersion {
        self.version
    }

    /// cost 参数
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// salt + digest（53 个字符）
    pub fn body(&self) -> &str {
        &self.body
    }

    /// salt 部分（前 22 个字符）
    pub fn salt(&self) -> &str {
        &self.body[..SALT_LEN]
    }

    /// digest 部分（后 31 个字符）
    pub fn digest(&self) -> &str {
        &self.body[SALT_LEN..]
    }

    /// 归一化版本标识后的副本
    pub fn normalized(&self) -> Self {
        self.clone().into_normalized()
    }

    /// 归一化版本标识：`2y` 改写为 `2b`
    pub fn into_normalized(mut self) -> Self {
        self.version = self.version.normalized();
        self
    }
}

impl fmt::Display for BcryptHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}${:02}${}", self.version, self.rounds, self.body)
    }
}

impl FromStr for BcryptHash {
    type Err = InvalidHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
