//! bcrypt 版本标识

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidHashError;

/// bcrypt 版本标识（`$` 之后的两个字符）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BcryptVersion {
    /// `2a` - 早期修订版
    #[cfg_attr(feature = "serde", serde(rename = "2a"))]
    TwoA,
    /// `2b` - OpenBSD 修订版，多数非 PHP 实现输出此版本
    #[cfg_attr(feature = "serde", serde(rename = "2b"))]
    TwoB,
    /// `2y` - PHP `password_hash` 输出的版本
    #[cfg_attr(feature = "serde", serde(rename = "2y"))]
    TwoY,
}

impl BcryptVersion {
    /// 所有支持的版本
    pub const ALL: [BcryptVersion; 3] = [
        BcryptVersion::TwoA,
        BcryptVersion::TwoB,
        BcryptVersion::TwoY,
    ];

    /// 两字符的版本标识
    pub fn as_str(&self) -> &'static str {
        match self {
            BcryptVersion::TwoA => "2a",
            BcryptVersion::TwoB => "2b",
            BcryptVersion::TwoY => "2y",
        }
    }

    /// 是否为 PHP 专有的 `2y`
    pub fn is_php_variant(&self) -> bool {
        matches!(self, BcryptVersion::TwoY)
    }

    /// 归一化后的版本：`2y` 改写为 `2b`，其他不变
    pub fn normalized(self) -> Self {
        match self {
            BcryptVersion::TwoY => BcryptVersion::TwoB,
            other => other,
        }
    }
}

impl fmt::Display for BcryptVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BcryptVersion {
    type Err = InvalidHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2a" => Ok(BcryptVersion::TwoA),
            "2b" => Ok(BcryptVersion::TwoB),
            "2y" => Ok(BcryptVersion::TwoY),
            _ => Err(InvalidHashError::InvalidFormat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        for version in BcryptVersion::ALL {
            let parsed: BcryptVersion = version.as_str().parse().unwrap();
            assert_eq!(parsed, version);
            assert_eq!(parsed.to_string(), version.as_str());
        }
    }

    #[test]
    fn test_unknown_versions_rejected() {
        for tag in ["2", "2c", "2x", "2Y", "1", ""] {
            assert_eq!(
                tag.parse::<BcryptVersion>(),
                Err(InvalidHashError::InvalidFormat),
                "{tag:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_normalized() {
        assert_eq!(BcryptVersion::TwoY.normalized(), BcryptVersion::TwoB);
        assert_eq!(BcryptVersion::TwoA.normalized(), BcryptVersion::TwoA);
        assert_eq!(BcryptVersion::TwoB.normalized(), BcryptVersion::TwoB);

        assert!(BcryptVersion::TwoY.is_php_variant());
        assert!(!BcryptVersion::TwoB.is_php_variant());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde_uses_tag_text() {
        let json = serde_json::to_string(&BcryptVersion::TwoY).unwrap();
        assert_eq!(json, "\"2y\"");

        let version: BcryptVersion = serde_json::from_str("\"2a\"").unwrap();
        assert_eq!(version, BcryptVersion::TwoA);
    }
}
