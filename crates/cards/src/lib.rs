pub mod validate;

use std::str::FromStr;

use common_utils::errors;
use error_stack::report;
use masking::{PeekInterface, StrongSecret};
use serde::{de, Deserialize, Serialize, Serializer};

pub use crate::validate::{CCValError, CardNumber, CardNumberStrategy};

/// Card verification value: three or four digits, kept as text so leading zeros survive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardSecurityCode(StrongSecret<String>);

impl CardSecurityCode {
    pub fn new(secret: StrongSecret<String>) -> errors::CustomResult<Self, errors::ValidationError> {
        let csc = secret.peek();

        if (3..=4).contains(&csc.len()) && csc.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(secret))
        } else {
            Err(report!(errors::ValidationError::InvalidValue {
                message: "invalid card security code".to_string()
            }))
        }
    }
}

impl FromStr for CardSecurityCode {
    type Err = error_stack::Report<errors::ValidationError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(StrongSecret::new(s.to_string()))
    }
}

impl PeekInterface<StrongSecret<String>> for CardSecurityCode {
    fn peek(&self) -> &StrongSecret<String> {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardExpirationMonth(StrongSecret<u8>);

impl CardExpirationMonth {
    pub fn new(secret: StrongSecret<u8>) -> errors::CustomResult<Self, errors::ValidationError> {
        let month = secret.peek();

        if (1..=12).contains(month) {
            Ok(Self(secret))
        } else {
            Err(report!(errors::ValidationError::InvalidValue {
                message: "invalid card expiration month".to_string()
            }))
        }
    }

    pub fn two_digits(&self) -> String {
        format!("{:02}", self.0.peek())
    }
}

impl TryFrom<u8> for CardExpirationMonth {
    type Error = error_stack::Report<errors::ValidationError>;

    fn try_from(month: u8) -> Result<Self, Self::Error> {
        Self::new(StrongSecret::new(month))
    }
}

impl PeekInterface<u8> for CardExpirationMonth {
    fn peek(&self) -> &u8 {
        self.0.peek()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardExpirationYear(StrongSecret<u16>);

impl CardExpirationYear {
    pub fn new(secret: StrongSecret<u16>) -> errors::CustomResult<Self, errors::ValidationError> {
        let year = secret.peek();

        if (1997..=9999).contains(year) {
            Ok(Self(secret))
        } else {
            Err(report!(errors::ValidationError::InvalidValue {
                message: "invalid card expiration year".to_string()
            }))
        }
    }

    pub fn four_digits(&self) -> String {
        self.0.peek().to_string()
    }

    pub fn two_digits(&self) -> String {
        format!("{:02}", self.0.peek() % 100)
    }
}

impl TryFrom<u16> for CardExpirationYear {
    type Error = error_stack::Report<errors::ValidationError>;

    fn try_from(year: u16) -> Result<Self, Self::Error> {
        Self::new(StrongSecret::new(year))
    }
}

impl PeekInterface<u16> for CardExpirationYear {
    fn peek(&self) -> &u16 {
        self.0.peek()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardExpiration {
    pub month: CardExpirationMonth,
    pub year: CardExpirationYear,
}

impl CardExpiration {
    pub fn new(month: u8, year: u16) -> errors::CustomResult<Self, errors::ValidationError> {
        Ok(Self {
            month: CardExpirationMonth::try_from(month)?,
            year: CardExpirationYear::try_from(year)?,
        })
    }

    /// Expiry rendered as two-digit year followed by two-digit month (`1305` for May 2013).
    pub fn yymm(&self) -> String {
        format!("{}{}", self.year.two_digits(), self.month.two_digits())
    }

    pub fn get_month(&self) -> &CardExpirationMonth {
        &self.month
    }

    pub fn get_year(&self) -> &CardExpirationYear {
        &self.year
    }
}

impl Serialize for CardSecurityCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.peek().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CardSecurityCode {
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let csc = String::deserialize(deserializer)?;
        Self::from_str(&csc).map_err(|err| de::Error::custom(err.current_context()))
    }
}

impl Serialize for CardExpirationMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.peek().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CardExpirationMonth {
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let month = u8::deserialize(deserializer)?;
        Self::try_from(month).map_err(|err| de::Error::custom(err.current_context()))
    }
}

impl Serialize for CardExpirationYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.peek().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CardExpirationYear {
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let year = u16::deserialize(deserializer)?;
        Self::try_from(year).map_err(|err| de::Error::custom(err.current_context()))
    }
}
