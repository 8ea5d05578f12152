//! # bcrypt-compat
//!
//! bcrypt 哈希标签的校验与跨实现转换。
//!
//! PHP 的 `password_hash` 输出 `$2y$` 前缀的 bcrypt 哈希，而多数其他实现只接受
//! `$2a$` / `$2b$`。两者的 salt 与 digest 完全一致，只需改写版本标识即可互通。
//! 本库不执行任何哈希计算，只处理字符串格式。
//!
//! ## 功能特性
//!
//! - **格式校验**: `$2[aby]$DD$<53 chars>`，rounds 限定在 4-31
//! - **rounds 读取**: 尽力读取 cost 参数，失败时回退到默认值
//! - **版本归一化**: `2y` 改写为 `2b`，`2a` / `2b` 原样返回
//! - **严格 / 宽松模式**: 无效输入返回错误或失败结果
//!
//! ## Features
//!
//! - `serde` - 为配置与结果类型派生 `Serialize` / `Deserialize`，支持从 JSON 加载配置（默认启用）
//!
//! ## 转换示例
//!
//! ```rust
//! use bcrypt_compat::{convert, is_valid_hash, get_rounds};
//!
//! let php_hash = "$2y$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";
//! assert!(is_valid_hash(php_hash));
//! assert_eq!(get_rounds(php_hash), 10);
//!
//! let outcome = convert(php_hash).unwrap();
//! assert_eq!(outcome.hash, "$2b$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy");
//! ```
//!
//! ## 宽松模式示例
//!
//! ```rust
//! use bcrypt_compat::{ConversionSettings, HashConverter};
//!
//! let converter = HashConverter::new(ConversionSettings::lenient().with_rounds(12));
//!
//! let outcome = converter.convert("$2y$10$tooshort", None).unwrap();
//! assert!(!outcome.success);
//! assert_eq!(outcome.hash, "");
//! assert_eq!(outcome.rounds, 12);
//! ```

pub mod converter;
pub mod error;
pub mod hash;

pub use error::{Error, InvalidHashError, Result};

// ============================================================================
// 哈希标签相关导出
// ============================================================================

pub use hash::{BcryptHash, BcryptVersion, get_rounds, is_valid_hash, needs_conversion};

// ============================================================================
// 转换相关导出
// ============================================================================

pub use converter::{
    ConversionOptions, ConversionOutcome, ConversionSettings, HashConverter, convert, convert_with,
};
