use std::{fmt, ops::Deref, str::FromStr, sync::LazyLock};

use common_enums::CardNetwork;
use masking::{PeekInterface, Strategy, StrongSecret, WithType};
use regex::Regex;
use router_env::logger;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[derive(Debug, Deserialize, Serialize, Error)]
#[error("not a valid credit card number")]
pub struct CCValError;

impl From<core::convert::Infallible> for CCValError {
    fn from(_: core::convert::Infallible) -> Self {
        Self
    }
}

/// Card number
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct CardNumber(StrongSecret<String, CardNumberStrategy>);

/// Issuer prefixes, checked in order.
static CARD_NETWORK_PATTERNS: LazyLock<Vec<(CardNetwork, Regex)>> = LazyLock::new(|| {
    [
        (CardNetwork::Visa, r"^4\d{12}(\d{3}){0,2}$"),
        (
            CardNetwork::Mastercard,
            r"^(5[1-5]\d{4}|222[1-9]\d{2}|22[3-9]\d{3}|2[3-6]\d{4}|27[01]\d{3}|2720\d{2})\d{10}$",
        ),
        (CardNetwork::AmericanExpress, r"^3[47]\d{13}$"),
        (CardNetwork::DinersClub, r"^3(0[0-5]|[68]\d)\d{11,16}$"),
        (CardNetwork::Discover, r"^(6011|65\d{2}|64[4-9]\d)\d{12,15}$"),
        (CardNetwork::JCB, r"^35(2[89]|[3-8]\d)\d{12,15}$"),
        (CardNetwork::UnionPay, r"^62\d{14,17}$"),
        (CardNetwork::Maestro, r"^(5018|5020|5038|6304|6759|676[1-3])\d{8,15}$"),
    ]
    .into_iter()
    .filter_map(|(network, pattern)| match Regex::new(pattern) {
        Ok(regex) => Some((network, regex)),
        Err(error) => {
            logger::error!(?network, %error, "invalid card network pattern");
            None
        }
    })
    .collect()
});

impl CardNumber {
    /// First six digits, the issuer identification number.
    pub fn get_card_isin(&self) -> String {
        self.0.peek().chars().take(6).collect::<String>()
    }

    /// The full card number. Only for building connector requests.
    pub fn get_card_no(&self) -> String {
        self.0.peek().to_owned()
    }

    pub fn get_last4(&self) -> String {
        let number = self.0.peek();
        number
            .get(number.len().saturating_sub(4)..)
            .unwrap_or_default()
            .to_string()
    }

    /// Card network inferred from the issuer prefix.
    pub fn get_card_network(&self) -> Option<CardNetwork> {
        let number = self.0.peek();
        CARD_NETWORK_PATTERNS
            .iter()
            .find(|(_, pattern)| pattern.is_match(number))
            .map(|(network, _)| *network)
    }
}

impl FromStr for CardNumber {
    type Err = CCValError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cc_no_whitespace: String = s.split_whitespace().collect();

        if !(12..=19).contains(&cc_no_whitespace.len())
            || !cc_no_whitespace.chars().all(|c| c.is_ascii_digit())
            || !luhn::valid(&cc_no_whitespace)
        {
            return Err(CCValError);
        }

        Ok(Self(StrongSecret::from_str(&cc_no_whitespace)?))
    }
}

impl TryFrom<String> for CardNumber {
    type Error = CCValError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl Deref for CardNumber {
    type Target = StrongSecret<String, CardNumberStrategy>;

    fn deref(&self) -> &StrongSecret<String, CardNumberStrategy> {
        &self.0
    }
}

impl<'de> Deserialize<'de> for CardNumber {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

pub enum CardNumberStrategy {}

impl<T> Strategy<T> for CardNumberStrategy
where
    T: AsRef<str>,
{
    fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val_str: &str = val.as_ref();

        if val_str.len() < 15 || val_str.len() > 19 {
            return WithType::fmt(val, f);
        }

        if let Some(value) = val_str.get(..6) {
            write!(f, "{}{}", value, "*".repeat(val_str.len() - 6))
        } else {
            logger::error!("Invalid card number {val_str}");
            WithType::fmt(val, f)
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use masking::Secret;

    use super::*;

    #[test]
    fn valid_card_number() {
        let s = "371449635398431";
        assert_eq!(
            CardNumber::from_str(s).unwrap(),
            CardNumber(StrongSecret::from_str(s).unwrap())
        );
    }

    #[test]
    fn invalid_card_number() {
        let s = "371446431";
        assert_eq!(
            CardNumber::from_str(s).unwrap_err().to_string(),
            "not a valid credit card number".to_string()
        );
    }

    #[test]
    fn non_digit_card_number() {
        assert!(CardNumber::from_str("4111-1111-1111-1111").is_err());
    }

    #[test]
    fn card_number_no_whitespace() {
        let s = "5123 4567 8901 2346";
        assert_eq!(
            CardNumber::from_str(s).unwrap().to_string(),
            "512345**********"
        );
    }

    #[test]
    fn test_valid_card_number_masking() {
        let secret: Secret<String, CardNumberStrategy> =
            Secret::new("1234567890987654".to_string());
        assert_eq!("123456**********", format!("{secret:?}"));
    }

    #[test]
    fn test_invalid_card_number_masking() {
        let secret: Secret<String, CardNumberStrategy> = Secret::new("1234567890".to_string());
        assert_eq!("*** alloc::string::String ***", format!("{secret:?}"));
    }

    #[test]
    fn test_valid_card_number_deserialization() {
        let card_number = serde_json::from_str::<CardNumber>(r#""3714 4963 5398 431""#).unwrap();
        assert_eq!(card_number.get_card_no(), "371449635398431");
        assert_eq!(card_number.get_last4(), "8431");
        assert_eq!(card_number.get_card_isin(), "371449");
    }

    #[test]
    fn detects_card_networks() {
        let network = |number: &str| CardNumber::from_str(number).unwrap().get_card_network();

        assert_eq!(network("4111111111111111"), Some(CardNetwork::Visa));
        assert_eq!(network("5123456789012346"), Some(CardNetwork::Mastercard));
        assert_eq!(network("5555555555554444"), Some(CardNetwork::Mastercard));
        assert_eq!(network("371449635398431"), Some(CardNetwork::AmericanExpress));
        assert_eq!(network("30569309025904"), Some(CardNetwork::DinersClub));
        assert_eq!(network("6011111111111117"), Some(CardNetwork::Discover));
        assert_eq!(network("3530111333300000"), Some(CardNetwork::JCB));
    }
}
