//! Amount types.
//!
//! Amounts travel through the gateway crates as [`MinorUnit`]s (cents for NZD). Each connector
//! declares the representation it sends on the wire through an [`AmountConvertor`].

use std::fmt::Display;

use common_enums::Currency;
use error_stack::ResultExt;
use serde::{Deserialize, Serialize};

use crate::errors::{CustomResult, ParsingError};

/// This Unit struct represents MinorUnit in which core amount works
#[derive(
    Default, Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct MinorUnit(i64);

impl MinorUnit {
    /// forms a new minor unit from amount
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// A zero amount, used by card verification flows.
    pub fn zero() -> Self {
        Self(0)
    }
}

impl Display for MinorUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Amount in minor units, sent as a string (`"100"` for one dollar).
#[derive(Default, Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct StringMinorUnit(String);

impl StringMinorUnit {
    /// Borrow the wire representation.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for StringMinorUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Conversion between [`MinorUnit`] and the representation a connector puts on the wire.
pub trait AmountConvertor: Send {
    /// Connector-side representation.
    type Output;

    /// Convert an amount for sending.
    fn convert(
        &self,
        amount: MinorUnit,
        currency: Currency,
    ) -> CustomResult<Self::Output, ParsingError>;

    /// Convert a connector amount back to minor units.
    fn convert_back(
        &self,
        amount: Self::Output,
        currency: Currency,
    ) -> CustomResult<MinorUnit, ParsingError>;
}

/// Connectors which take minor units as a string.
#[derive(Debug, Default, Clone, Copy)]
pub struct StringMinorUnitForConnector;

impl AmountConvertor for StringMinorUnitForConnector {
    type Output = StringMinorUnit;

    fn convert(
        &self,
        amount: MinorUnit,
        _currency: Currency,
    ) -> CustomResult<Self::Output, ParsingError> {
        Ok(StringMinorUnit(amount.to_string()))
    }

    fn convert_back(
        &self,
        amount: Self::Output,
        _currency: Currency,
    ) -> CustomResult<MinorUnit, ParsingError> {
        amount
            .0
            .parse::<i64>()
            .map(MinorUnit::new)
            .change_context(ParsingError)
            .attach_printable_lazy(|| format!("Invalid minor unit amount {:?}", amount.0))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn minor_unit_to_string_minor_unit() {
        let converted = StringMinorUnitForConnector
            .convert(MinorUnit::new(100), Currency::NZD)
            .unwrap();
        assert_eq!(converted.as_str(), "100");
        assert_eq!(
            StringMinorUnitForConnector
                .convert_back(converted, Currency::NZD)
                .unwrap(),
            MinorUnit::new(100)
        );
    }

    #[test]
    fn invalid_string_minor_unit_is_rejected() {
        let result = StringMinorUnitForConnector
            .convert_back(StringMinorUnit("ten".to_string()), Currency::NZD);
        assert!(result.is_err());
    }
}
