#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::str::FromStr;

use cards::{CardExpiration, CardExpirationMonth, CardExpirationYear, CardSecurityCode};
use masking::PeekInterface;

#[test]
fn test_card_security_code() {
    // no panic
    let valid_card_security_code = CardSecurityCode::from_str("0123").unwrap();

    // will panic on unwrap
    let invalid_card_security_code = CardSecurityCode::from_str("12");

    assert_eq!(valid_card_security_code.peek().peek(), "0123");
    assert!(invalid_card_security_code.is_err());
    assert!(CardSecurityCode::from_str("12a").is_err());

    let serialized = serde_json::to_string(&valid_card_security_code).unwrap();
    assert_eq!(serialized, r#""0123""#);

    let derialized = serde_json::from_str::<CardSecurityCode>(&serialized).unwrap();
    assert_eq!(derialized, valid_card_security_code);

    let invalid_deserialization = serde_json::from_str::<CardSecurityCode>(r#""12345""#);
    assert!(invalid_deserialization.is_err());
}

#[test]
fn test_card_expiration_month() {
    // no panic
    let card_exp_month = CardExpirationMonth::try_from(12u8).unwrap();

    // will panic on unwrap
    let invalid_card_exp_month = CardExpirationMonth::try_from(13u8);

    assert_eq!(*card_exp_month.peek(), 12);
    assert_eq!(CardExpirationMonth::try_from(5u8).unwrap().two_digits(), "05");
    assert!(invalid_card_exp_month.is_err());
    assert!(CardExpirationMonth::try_from(0u8).is_err());

    let serialized = serde_json::to_string(&card_exp_month).unwrap();
    assert_eq!(serialized, "12");

    let derialized = serde_json::from_str::<CardExpirationMonth>(&serialized).unwrap();
    assert_eq!(*derialized.peek(), 12);

    let invalid_deserialization = serde_json::from_str::<CardExpirationMonth>("13");
    assert!(invalid_deserialization.is_err());
}

#[test]
fn test_card_expiration_year() {
    // no panic
    let card_exp_year = CardExpirationYear::try_from(2013u16).unwrap();

    // will panic on unwrap
    let invalid_card_exp_year = CardExpirationYear::try_from(13u16);

    assert_eq!(*card_exp_year.peek(), 2013);
    assert_eq!(card_exp_year.two_digits(), "13");
    assert_eq!(card_exp_year.four_digits(), "2013");
    assert_eq!(CardExpirationYear::try_from(2100u16).unwrap().two_digits(), "00");
    assert!(invalid_card_exp_year.is_err());

    let serialized = serde_json::to_string(&card_exp_year).unwrap();
    assert_eq!(serialized, "2013");

    let derialized = serde_json::from_str::<CardExpirationYear>(&serialized).unwrap();
    assert_eq!(*derialized.peek(), 2013);

    let invalid_deserialization = serde_json::from_str::<CardExpirationYear>("123");
    assert!(invalid_deserialization.is_err());
}

#[test]
fn test_card_expiration() {
    let card_exp = CardExpiration::new(5, 2013).unwrap();

    assert_eq!(*card_exp.get_month().peek(), 5);
    assert_eq!(*card_exp.get_year().peek(), 2013);
    assert_eq!(card_exp.yymm(), "1305");

    assert!(CardExpiration::new(13, 2013).is_err());
    assert!(CardExpiration::new(5, 13).is_err());
}
