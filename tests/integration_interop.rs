//! 与 bcrypt 实现的互通性集成测试
//!
//! 使用 `bcrypt` crate 生成真实的 `$2y$` 哈希，确认转换后的 `$2b$` 哈希仍能验证同一密码。

use bcrypt::Version;
use bcrypt_compat::{BcryptHash, BcryptVersion, convert, get_rounds, is_valid_hash};

const COST: u32 = 4;

fn php_style_hash(password: &str) -> String {
    bcrypt::hash_with_result(password, COST)
        .unwrap()
        .format_for_version(Version::TwoY)
}

/// 测试真实的 2y 哈希可以被校验和解析
#[test]
fn test_real_2y_hash_is_valid() {
    let hash = php_style_hash("correct horse battery staple");

    assert!(hash.starts_with("$2y$04$"));
    assert!(is_valid_hash(&hash));
    assert_eq!(get_rounds(&hash), COST);

    let parsed = BcryptHash::parse(&hash).unwrap();
    assert_eq!(parsed.version(), BcryptVersion::TwoY);
    assert_eq!(parsed.rounds(), COST);
}

/// 测试转换后的哈希仍然验证原密码
#[test]
fn test_converted_hash_verifies_password() {
    let password = "correct horse battery staple";
    let hash = php_style_hash(password);

    let outcome = convert(&hash).unwrap();
    assert!(outcome.success);
    assert!(outcome.hash.starts_with("$2b$04$"));

    assert!(bcrypt::verify(password, &outcome.hash).unwrap());
    assert!(!bcrypt::verify("wrong password", &outcome.hash).unwrap());
}

/// 测试 bcrypt 默认输出的 2b 哈希原样返回
#[test]
fn test_native_2b_hash_unchanged() {
    let hash = bcrypt::hash("密码测试🔐", COST).unwrap();
    assert!(hash.starts_with("$2b$"));

    let outcome = convert(&hash).unwrap();
    assert_eq!(outcome.hash, hash);
    assert!(bcrypt::verify("密码测试🔐", &outcome.hash).unwrap());
}

/// 测试 2a 哈希原样返回并仍可验证
#[test]
fn test_2a_hash_unchanged() {
    let hash = bcrypt::hash_with_result("legacy", COST)
        .unwrap()
        .format_for_version(Version::TwoA);

    let outcome = convert(&hash).unwrap();
    assert_eq!(outcome.hash, hash);
    assert!(bcrypt::verify("legacy", &outcome.hash).unwrap());
}
