use cards::CardSecurityCode;
use common_enums::Currency;
use common_utils::types::MinorUnit;
use masking::Secret;
use serde::{Deserialize, Serialize};

use crate::payment_method_data::{Card, PaymentMethodData};

/// Merchant-supplied details that ride along with an operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOptions {
    pub order_id: Option<String>,
    pub description: Option<String>,
    pub customer: Option<String>,
    pub currency: Option<Currency>,
    /// Token to assign when storing a card. The vendor generates one when absent.
    pub token: Option<Secret<String>>,
    /// Card verification value sent with a capture.
    pub card_cvc: Option<CardSecurityCode>,
}

impl PaymentOptions {
    pub fn get_currency(&self) -> Currency {
        self.currency.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentsAuthorizeData {
    pub minor_amount: MinorUnit,
    pub payment_method_data: PaymentMethodData,
    pub options: PaymentOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentsCaptureData {
    pub minor_amount_to_capture: MinorUnit,
    pub connector_transaction_id: String,
    pub options: PaymentOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefundsData {
    pub minor_refund_amount: MinorUnit,
    pub connector_transaction_id: String,
    pub options: PaymentOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentMethodTokenizationData {
    pub card: Card,
    pub options: PaymentOptions,
}

/// A zero-amount authorization that checks the card without charging it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyData {
    pub card: Card,
    pub options: PaymentOptions,
}

/// One call against a gateway.
#[derive(Debug, Clone, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum GatewayOperation {
    Purchase(PaymentsAuthorizeData),
    Authorize(PaymentsAuthorizeData),
    Capture(PaymentsCaptureData),
    Refund(RefundsData),
    Store(PaymentMethodTokenizationData),
    Verify(VerifyData),
}

impl GatewayOperation {
    pub fn get_options(&self) -> &PaymentOptions {
        match self {
            Self::Purchase(data) | Self::Authorize(data) => &data.options,
            Self::Capture(data) => &data.options,
            Self::Refund(data) => &data.options,
            Self::Store(data) => &data.options,
            Self::Verify(data) => &data.options,
        }
    }

    /// Amount the operation moves. Verify always moves zero; store moves nothing.
    pub fn get_minor_amount(&self) -> Option<MinorUnit> {
        match self {
            Self::Purchase(data) | Self::Authorize(data) => Some(data.minor_amount),
            Self::Capture(data) => Some(data.minor_amount_to_capture),
            Self::Refund(data) => Some(data.minor_refund_amount),
            Self::Verify(_) => Some(MinorUnit::zero()),
            Self::Store(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture() -> GatewayOperation {
        GatewayOperation::Capture(PaymentsCaptureData {
            minor_amount_to_capture: MinorUnit::new(100),
            connector_transaction_id: "0009062250-01".to_string(),
            options: PaymentOptions {
                order_id: Some("1".to_string()),
                ..Default::default()
            },
        })
    }

    #[test]
    fn operation_names_are_snake_case() {
        let name: &'static str = (&capture()).into();
        assert_eq!(name, "capture");
        assert_eq!(capture().to_string(), "capture");
    }

    #[test]
    fn currency_defaults_to_nzd() {
        assert_eq!(capture().get_options().get_currency(), Currency::NZD);
        assert_eq!(capture().get_minor_amount(), Some(MinorUnit::new(100)));
    }
}
