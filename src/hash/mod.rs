//! bcrypt 哈希标签模块
//!
//! 提供哈希标签的语法校验、rounds 读取和结构化解析。
//!
//! ## 示例
//!
//! ```rust
//! use bcrypt_compat::hash::{BcryptHash, BcryptVersion, is_valid_hash};
//!
//! let php_hash = "$2y$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";
//! assert!(is_valid_hash(php_hash));
//!
//! let parsed: BcryptHash = php_hash.parse().unwrap();
//! assert_eq!(parsed.version(), BcryptVersion::TwoY);
//! assert_eq!(parsed.normalized().version(), BcryptVersion::TwoB);
//! ```

mod tag;
mod version;

pub use tag::{
    BODY_LEN, BcryptHash, DEFAULT_ROUNDS, DIGEST_LEN, HASH_LEN, MAX_ROUNDS, MIN_ROUNDS, SALT_LEN,
    get_rounds, get_rounds_or, is_valid_hash, is_valid_rounds, needs_conversion,
};
pub use version::BcryptVersion;
