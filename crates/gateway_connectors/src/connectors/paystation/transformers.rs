use std::{collections::HashMap, fmt};

use cards::{CardNumber, CardSecurityCode};
use common_enums::{CardNetwork, Currency};
use common_utils::types::StringMinorUnit;
use gateway_domain_models::{
    payment_method_data::{Card, PaymentMethodData},
    router_data::{ConnectorAuthType, RouterData},
    router_request_types::GatewayOperation,
    router_response_types::{FailureClassification, GatewayResponse},
};
use gateway_interfaces::{consts, errors};
use masking::{PeekInterface, Secret};
use router_env::logger;

use crate::utils;

pub struct PaystationRouterData<T> {
    pub amount: Option<StringMinorUnit>,
    pub router_data: T,
}

impl<T> From<(Option<StringMinorUnit>, T)> for PaystationRouterData<T> {
    fn from((amount, item): (Option<StringMinorUnit>, T)) -> Self {
        Self {
            amount,
            router_data: item,
        }
    }
}

pub mod paystation_constants {
    pub const CONNECTOR_NAME: &str = "paystation";
    pub const FIELD_PREFIX: &str = "pstn_";
    pub const FLAG_TRUE: &str = "t";
    pub const TEST_MODE: &str = "T";
    pub const EXPIRY_DATE_FORMAT: &str = "yymm";
    /// Closes every request body.
    pub const BODY_TERMINATOR: (&str, &str) = ("paystation", "_empty");
    /// `0` is "Transaction successful", `34` is "Future Payment Saved Ok".
    pub const SUCCESS_CODES: [&str; 2] = ["0", "34"];
    pub const ERROR_CODE_KEYS: [&str; 2] = ["ec", "paystation_error_code"];
    /// Reply fields masked whenever a reply is formatted.
    pub const SECRET_REPLY_KEYS: [&str; 1] = ["future_payment_token"];
    pub const CARD_NUMBER_FIELD: &str = "pstn_cn";
    pub const CARD_SECURITY_CODE_FIELD: &str = "pstn_cc";
}

pub struct PaystationAuthType {
    pub(super) paystation_id: Secret<String>,
    pub(super) gateway_id: Secret<String>,
}

impl TryFrom<&ConnectorAuthType> for PaystationAuthType {
    type Error = error_stack::Report<errors::ConnectorError>;
    fn try_from(auth_type: &ConnectorAuthType) -> Result<Self, Self::Error> {
        match auth_type {
            ConnectorAuthType::BodyKey { api_key, key1 } => Ok(Self {
                paystation_id: api_key.to_owned(),
                gateway_id: key1.to_owned(),
            }),
            _ => Err(errors::ConnectorError::FailedToObtainAuthType.into()),
        }
    }
}

/// Card types Paystation accepts in `ct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum PaystationCardType {
    Visa,
    Mastercard,
    Amex,
    Dinersclub,
}

impl TryFrom<CardNetwork> for PaystationCardType {
    type Error = error_stack::Report<errors::ConnectorError>;
    fn try_from(network: CardNetwork) -> Result<Self, Self::Error> {
        match network {
            CardNetwork::Visa => Ok(Self::Visa),
            CardNetwork::Mastercard => Ok(Self::Mastercard),
            CardNetwork::AmericanExpress => Ok(Self::Amex),
            CardNetwork::DinersClub => Ok(Self::Dinersclub),
            CardNetwork::Discover
            | CardNetwork::JCB
            | CardNetwork::UnionPay
            | CardNetwork::Maestro => Err(errors::ConnectorError::NotSupported {
                message: format!("{network} cards"),
                connector: paystation_constants::CONNECTOR_NAME,
            }
            .into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaystationCard {
    number: CardNumber,
    card_type: PaystationCardType,
    expiry: String,
    cvc: Option<CardSecurityCode>,
}

impl TryFrom<&Card> for PaystationCard {
    type Error = error_stack::Report<errors::ConnectorError>;
    fn try_from(card: &Card) -> Result<Self, Self::Error> {
        let network = card
            .get_card_network()
            .ok_or(errors::ConnectorError::NotSupported {
                message: "Cards of an unknown network".to_string(),
                connector: paystation_constants::CONNECTOR_NAME,
            })?;

        Ok(Self {
            number: card.card_number.clone(),
            card_type: PaystationCardType::try_from(network)?,
            expiry: card.get_expiry_yymm(),
            cvc: card.card_cvc.clone(),
        })
    }
}

/// Future payment details: charging a stored token, or storing a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuturePayment {
    store_only: bool,
    token: Option<Secret<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaystationCapture {
    transaction_id: String,
    cvc: Option<CardSecurityCode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaystationRefund {
    transaction_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaystationPaymentsRequest {
    paystation_id: Secret<String>,
    gateway_id: Secret<String>,
    merchant_session: String,
    order_description: Option<String>,
    merchant_reference: Option<String>,
    amount: Option<(StringMinorUnit, Currency)>,
    card: Option<PaystationCard>,
    future_payment: Option<FuturePayment>,
    pre_auth: bool,
    capture: Option<PaystationCapture>,
    refund: Option<PaystationRefund>,
    customer: Option<String>,
    test_mode: bool,
}

impl PaystationPaymentsRequest {
    fn add_payment_method(
        &mut self,
        payment_method_data: &PaymentMethodData,
    ) -> Result<(), error_stack::Report<errors::ConnectorError>> {
        match payment_method_data {
            PaymentMethodData::Card(card) => {
                self.card = Some(PaystationCard::try_from(card)?);
            }
            PaymentMethodData::StoredToken(token) => {
                self.future_payment = Some(FuturePayment {
                    store_only: false,
                    token: Some(token.clone()),
                });
            }
        }
        Ok(())
    }

    /// Wire fields in the order Paystation documents them, prefixed and terminated.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        use paystation_constants::{EXPIRY_DATE_FORMAT, FLAG_TRUE, TEST_MODE};

        let mut fields: Vec<(&'static str, String)> = vec![
            ("pi", self.paystation_id.peek().clone()),
            ("gi", self.gateway_id.peek().clone()),
            ("2p", FLAG_TRUE.to_string()),
            ("nr", FLAG_TRUE.to_string()),
            ("df", EXPIRY_DATE_FORMAT.to_string()),
            ("ms", self.merchant_session.clone()),
        ];

        if let Some(description) = &self.order_description {
            fields.push(("mo", description.clone()));
        }
        if let Some(order_id) = &self.merchant_reference {
            fields.push(("mr", order_id.clone()));
        }
        if let Some((amount, currency)) = &self.amount {
            fields.push(("am", amount.to_string()));
            fields.push(("cu", currency.to_string()));
        }
        if let Some(card) = &self.card {
            fields.push(("cn", card.number.get_card_no()));
            fields.push(("ct", card.card_type.to_string()));
            fields.push(("ex", card.expiry.clone()));
            if let Some(cvc) = &card.cvc {
                fields.push(("cc", cvc.peek().peek().clone()));
            }
        }
        if let Some(future_payment) = &self.future_payment {
            fields.push(("fp", FLAG_TRUE.to_string()));
            if future_payment.store_only {
                fields.push(("fs", FLAG_TRUE.to_string()));
            }
            if let Some(token) = &future_payment.token {
                fields.push(("ft", token.peek().clone()));
            }
        }
        if self.pre_auth {
            fields.push(("pa", FLAG_TRUE.to_string()));
        }
        if let Some(capture) = &self.capture {
            fields.push(("cp", FLAG_TRUE.to_string()));
            fields.push(("cx", capture.transaction_id.clone()));
            if let Some(cvc) = &capture.cvc {
                fields.push(("cc", cvc.peek().peek().clone()));
            }
        }
        if let Some(refund) = &self.refund {
            fields.push(("rc", FLAG_TRUE.to_string()));
            fields.push(("rt", refund.transaction_id.clone()));
        }
        if let Some(customer) = &self.customer {
            fields.push(("mc", customer.clone()));
        }
        if self.test_mode {
            fields.push(("tm", TEST_MODE.to_string()));
        }

        let (terminator_key, terminator_value) = paystation_constants::BODY_TERMINATOR;
        fields
            .into_iter()
            .map(|(key, value)| (format!("{}{key}", paystation_constants::FIELD_PREFIX), value))
            .chain(std::iter::once((
                terminator_key.to_string(),
                terminator_value.to_string(),
            )))
            .collect()
    }
}

impl TryFrom<&PaystationRouterData<&RouterData>> for PaystationPaymentsRequest {
    type Error = error_stack::Report<errors::ConnectorError>;
    fn try_from(item: &PaystationRouterData<&RouterData>) -> Result<Self, Self::Error> {
        let router_data = item.router_data;
        let auth = PaystationAuthType::try_from(&router_data.connector_auth_type)?;
        let options = router_data.request.get_options();

        let mut request = Self {
            paystation_id: auth.paystation_id,
            gateway_id: auth.gateway_id,
            merchant_session: router_data.connector_request_reference_id.clone(),
            order_description: options.description.clone(),
            merchant_reference: options.order_id.clone(),
            amount: item
                .amount
                .clone()
                .map(|amount| (amount, options.get_currency())),
            card: None,
            future_payment: None,
            pre_auth: false,
            capture: None,
            refund: None,
            customer: None,
            test_mode: router_data.test_mode,
        };

        match &router_data.request {
            GatewayOperation::Purchase(data) => {
                request.add_payment_method(&data.payment_method_data)?;
                request.customer = options.customer.clone();
            }
            GatewayOperation::Authorize(data) => {
                request.add_payment_method(&data.payment_method_data)?;
                request.pre_auth = true;
            }
            GatewayOperation::Capture(data) => {
                request.capture = Some(PaystationCapture {
                    transaction_id: data.connector_transaction_id.clone(),
                    cvc: options.card_cvc.clone(),
                });
            }
            GatewayOperation::Refund(data) => {
                request.refund = Some(PaystationRefund {
                    transaction_id: data.connector_transaction_id.clone(),
                });
            }
            GatewayOperation::Store(data) => {
                request.card = Some(PaystationCard::try_from(&data.card)?);
                request.future_payment = Some(FuturePayment {
                    store_only: true,
                    token: options.token.clone(),
                });
            }
            GatewayOperation::Verify(data) => {
                request.card = Some(PaystationCard::try_from(&data.card)?);
                request.pre_auth = true;
            }
        }

        Ok(request)
    }
}

/// Normalized key of every tag Paystation is known to return. Tags missing here are
/// snake-cased on the fly.
pub const RESPONSE_FIELD_KEYS: &[(&str, &str)] = &[
    ("ec", "ec"),
    ("em", "em"),
    ("ti", "ti"),
    ("ct", "ct"),
    ("merchant_ref", "merchant_ref"),
    ("tm", "tm"),
    ("MerchantSession", "merchant_session"),
    ("UsedAcquirerMerchantID", "used_acquirer_merchant_id"),
    ("TransactionID", "transaction_id"),
    ("PurchaseAmount", "purchase_amount"),
    ("CaptureAmount", "capture_amount"),
    ("RefundAmount", "refund_amount"),
    ("SurchargeAmount", "surcharge_amount"),
    ("Locale", "locale"),
    ("ReturnReceiptNumber", "return_receipt_number"),
    ("ShoppingTransactionNumber", "shopping_transaction_number"),
    ("AcqResponseCode", "acq_response_code"),
    ("QSIResponseCode", "qsi_response_code"),
    ("CSCResultCode", "csc_result_code"),
    ("AVSResultCode", "avs_result_code"),
    ("TransactionTime", "transaction_time"),
    ("PaystationErrorCode", "paystation_error_code"),
    ("PaystationErrorMessage", "paystation_error_message"),
    (
        "PaystationExtendedErrorMessage",
        "paystation_extended_error_message",
    ),
    ("MerchantReference", "merchant_reference"),
    ("CardNo", "card_no"),
    ("CardExpiry", "card_expiry"),
    ("TransactionProcess", "transaction_process"),
    ("TransactionMode", "transaction_mode"),
    ("BatchNumber", "batch_number"),
    ("AuthorizeID", "authorize_id"),
    ("Cardtype", "cardtype"),
    ("Username", "username"),
    ("RequestIP", "request_ip"),
    ("RequestUserAgent", "request_user_agent"),
    ("RequestHttpReferrer", "request_http_referrer"),
    ("PaymentRequestTime", "payment_request_time"),
    ("DigitalOrderTime", "digital_order_time"),
    ("DigitalReceiptTime", "digital_receipt_time"),
    ("PaystationTransactionID", "paystation_transaction_id"),
    ("FuturePaymentToken", "future_payment_token"),
    ("IssuerName", "issuer_name"),
    ("IssuerCountry", "issuer_country"),
    ("RefundedAmount", "refunded_amount"),
    ("CapturedAmount", "captured_amount"),
    ("AuthorisedAmount", "authorised_amount"),
];

fn field_key(tag: &str) -> String {
    RESPONSE_FIELD_KEYS
        .iter()
        .find(|(known_tag, _)| *known_tag == tag)
        .map(|(_, key)| (*key).to_string())
        .unwrap_or_else(|| utils::to_underscore(tag))
}

/// A reply that carries a Paystation error code.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PaystationReply {
    params: HashMap<String, String>,
}

impl fmt::Debug for PaystationReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut params = self.params.iter().collect::<Vec<_>>();
        params.sort_unstable();

        let mut map = f.debug_map();
        for (key, value) in params {
            if paystation_constants::SECRET_REPLY_KEYS.contains(&key.as_str()) {
                let masked: Secret<&str> = Secret::new(value.as_str());
                map.entry(key, &masked);
            } else {
                map.entry(key, value);
            }
        }
        map.finish()
    }
}

impl PaystationReply {
    fn non_empty(&self, key: &str) -> Option<&str> {
        self.params
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    fn has_error_code(&self) -> bool {
        paystation_constants::ERROR_CODE_KEYS
            .iter()
            .any(|key| self.params.contains_key(*key))
    }

    /// The first non-blank code, or an empty one when the code element is present but blank.
    pub fn get_error_code(&self) -> Option<&str> {
        let [ec, paystation_error_code] = paystation_constants::ERROR_CODE_KEYS;
        self.non_empty(ec)
            .or_else(|| self.non_empty(paystation_error_code))
            .or_else(|| {
                self.params
                    .get(ec)
                    .or_else(|| self.params.get(paystation_error_code))
                    .map(String::as_str)
            })
            .map(str::trim)
    }

    pub fn is_success(&self) -> bool {
        self.get_error_code()
            .is_some_and(|code| paystation_constants::SUCCESS_CODES.contains(&code))
    }

    pub fn get_message(&self) -> &str {
        self.non_empty("em")
            .or_else(|| self.non_empty("paystation_error_message"))
            .unwrap_or(consts::NO_ERROR_MESSAGE)
    }

    pub fn get_authorization(&self) -> Option<&str> {
        self.non_empty("paystation_transaction_id")
            .or_else(|| self.non_empty("transaction_id"))
    }

    pub fn get_token(&self) -> Option<&str> {
        self.non_empty("future_payment_token")
    }

    pub fn is_test(&self) -> bool {
        self.params
            .get("tm")
            .is_some_and(|mode| mode.trim().eq_ignore_ascii_case(paystation_constants::FLAG_TRUE))
    }
}

/// Whatever the Paystation endpoint answered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaystationResponse {
    Reply(PaystationReply),
    /// Not XML, or XML without an error code (the vendor's HTML error fragment).
    Unrecognized { reason: String },
}

impl PaystationResponse {
    pub fn from_body(body: &str) -> Self {
        let document = match roxmltree::Document::parse(body.trim()) {
            Ok(document) => document,
            Err(error) => {
                logger::warn!(%error, "Paystation replied with a body that is not XML");
                return Self::Unrecognized {
                    reason: body.trim().to_string(),
                };
            }
        };

        let root = document.root_element();
        let params = root
            .children()
            .filter(|node| node.is_element())
            .map(|node| {
                (
                    field_key(node.tag_name().name()),
                    node.text().unwrap_or_default().to_string(),
                )
            })
            .collect::<HashMap<_, _>>();
        let reply = PaystationReply { params };

        if reply.has_error_code() {
            return Self::Reply(reply);
        }

        let text = root
            .descendants()
            .filter(|node| node.is_text())
            .filter_map(|node| node.text())
            .collect::<Vec<_>>()
            .join(" ");
        logger::warn!(
            root = root.tag_name().name(),
            "Paystation replied without an error code"
        );

        Self::Unrecognized {
            reason: text.split_whitespace().collect::<Vec<_>>().join(" "),
        }
    }
}

impl From<PaystationResponse> for GatewayResponse {
    fn from(response: PaystationResponse) -> Self {
        match response {
            PaystationResponse::Reply(reply) => {
                let success = reply.is_success();
                let failure = (!success).then(|| FailureClassification::GatewayError {
                    code: reply.get_error_code().unwrap_or_default().to_string(),
                });

                Self {
                    success,
                    message: reply.get_message().to_string(),
                    authorization: reply.get_authorization().map(ToOwned::to_owned),
                    token: reply.get_token().map(ToOwned::to_owned),
                    test: reply.is_test(),
                    failure,
                    params: reply.params,
                }
            }
            PaystationResponse::Unrecognized { reason } => Self {
                success: false,
                message: reason.clone(),
                authorization: None,
                params: HashMap::new(),
                token: None,
                test: false,
                failure: Some(FailureClassification::ProtocolError { reason }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::str::FromStr;

    use common_utils::types::MinorUnit;
    use gateway_domain_models::router_request_types::{
        PaymentMethodTokenizationData, PaymentOptions, PaymentsAuthorizeData, PaymentsCaptureData,
        RefundsData,
    };

    use super::*;

    fn card(number: &str) -> Card {
        Card {
            card_number: CardNumber::from_str(number).unwrap(),
            card_exp_month: 5u8.try_into().unwrap(),
            card_exp_year: 2013u16.try_into().unwrap(),
            card_cvc: Some(CardSecurityCode::from_str("123").unwrap()),
            card_network: None,
            card_holder_name: None,
        }
    }

    fn options() -> PaymentOptions {
        PaymentOptions {
            order_id: Some("1".to_string()),
            description: Some("Store Purchase".to_string()),
            customer: Some("Joe Bloggs, Customer ID #56".to_string()),
            ..Default::default()
        }
    }

    fn router_data(request: GatewayOperation, test_mode: bool) -> RouterData {
        RouterData {
            connector: "paystation".to_string(),
            connector_auth_type: ConnectorAuthType::BodyKey {
                api_key: Secret::new("609035".to_string()),
                key1: Secret::new("PUSHPAY".to_string()),
            },
            request,
            connector_request_reference_id: "a755b9c84a530aee91dc3077f57294b0".to_string(),
            test_mode,
        }
    }

    fn fields(request: GatewayOperation, amount: Option<&str>, test_mode: bool) -> Vec<String> {
        let data = router_data(request, test_mode);
        let amount = amount.map(minor_amount);
        let item = PaystationRouterData::from((amount, &data));
        PaystationPaymentsRequest::try_from(&item)
            .unwrap()
            .form_fields()
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect()
    }

    fn minor_amount(amount: &str) -> StringMinorUnit {
        use common_utils::types::{AmountConvertor, StringMinorUnitForConnector};

        StringMinorUnitForConnector
            .convert(MinorUnit::new(amount.parse().unwrap()), Currency::NZD)
            .unwrap()
    }

    #[test]
    fn card_purchase_fields_follow_wire_order() {
        let purchase = GatewayOperation::Purchase(PaymentsAuthorizeData {
            minor_amount: MinorUnit::new(100),
            payment_method_data: PaymentMethodData::Card(card("5123456789012346")),
            options: options(),
        });

        assert_eq!(
            fields(purchase, Some("100"), true),
            vec![
                "pstn_pi=609035",
                "pstn_gi=PUSHPAY",
                "pstn_2p=t",
                "pstn_nr=t",
                "pstn_df=yymm",
                "pstn_ms=a755b9c84a530aee91dc3077f57294b0",
                "pstn_mo=Store Purchase",
                "pstn_mr=1",
                "pstn_am=100",
                "pstn_cu=NZD",
                "pstn_cn=5123456789012346",
                "pstn_ct=mastercard",
                "pstn_ex=1305",
                "pstn_cc=123",
                "pstn_mc=Joe Bloggs, Customer ID #56",
                "pstn_tm=T",
                "paystation=_empty",
            ]
        );
    }

    #[test]
    fn token_purchase_sends_token_instead_of_card() {
        let purchase = GatewayOperation::Purchase(PaymentsAuthorizeData {
            minor_amount: MinorUnit::new(100),
            payment_method_data: PaymentMethodData::StoredToken(Secret::new(
                "u09fxli14afpnd6022x0z82317beqe9e2w048l9it8286k6lpvz9x27hdal9bl95".to_string(),
            )),
            options: options(),
        });
        let fields = fields(purchase, Some("100"), false);

        assert!(fields.contains(&"pstn_fp=t".to_string()));
        assert!(fields.contains(
            &"pstn_ft=u09fxli14afpnd6022x0z82317beqe9e2w048l9it8286k6lpvz9x27hdal9bl95".to_string()
        ));
        assert!(!fields.iter().any(|field| field.starts_with("pstn_cn=")));
        assert!(!fields.iter().any(|field| field.starts_with("pstn_fs=")));
        assert!(!fields.iter().any(|field| field.starts_with("pstn_tm=")));
    }

    #[test]
    fn store_without_token_lets_paystation_pick_one() {
        let store = GatewayOperation::Store(PaymentMethodTokenizationData {
            card: card("4111111111111111"),
            options: options(),
        });
        let fields = fields(store, None, true);

        assert!(fields.ends_with(&[
            "pstn_fp=t".to_string(),
            "pstn_fs=t".to_string(),
            "pstn_tm=T".to_string(),
            "paystation=_empty".to_string(),
        ]));
        assert!(fields.contains(&"pstn_cn=4111111111111111".to_string()));
        assert!(!fields.iter().any(|field| field.starts_with("pstn_ft=")));
        assert!(!fields.iter().any(|field| field.starts_with("pstn_am=")));
        assert!(!fields.iter().any(|field| field.starts_with("pstn_pa=")));
    }

    #[test]
    fn token_authorize_marks_a_pre_auth_future_payment() {
        let authorize = GatewayOperation::Authorize(PaymentsAuthorizeData {
            minor_amount: MinorUnit::new(100),
            payment_method_data: PaymentMethodData::StoredToken(Secret::new(
                "justatest1310263135".to_string(),
            )),
            options: options(),
        });
        let fields = fields(authorize, Some("100"), false);

        assert!(fields.ends_with(&[
            "pstn_fp=t".to_string(),
            "pstn_ft=justatest1310263135".to_string(),
            "pstn_pa=t".to_string(),
            "paystation=_empty".to_string(),
        ]));
        assert!(fields.contains(&"pstn_am=100".to_string()));
        for card_field in ["pstn_cn=", "pstn_ct=", "pstn_ex=", "pstn_cc=", "pstn_fs="] {
            assert!(!fields.iter().any(|field| field.starts_with(card_field)));
        }
    }

    #[test]
    fn capture_and_refund_reference_the_authorization() {
        let capture = GatewayOperation::Capture(PaymentsCaptureData {
            minor_amount_to_capture: MinorUnit::new(100),
            connector_transaction_id: "0009062250-01".to_string(),
            options: PaymentOptions {
                card_cvc: Some(CardSecurityCode::from_str("123").unwrap()),
                ..options()
            },
        });
        let capture_fields = fields(capture, Some("100"), false);
        assert!(capture_fields.ends_with(&[
            "pstn_cp=t".to_string(),
            "pstn_cx=0009062250-01".to_string(),
            "pstn_cc=123".to_string(),
            "paystation=_empty".to_string(),
        ]));

        let refund = GatewayOperation::Refund(RefundsData {
            minor_refund_amount: MinorUnit::new(100),
            connector_transaction_id: String::new(),
            options: options(),
        });
        let refund_fields = fields(refund, Some("100"), false);
        assert!(refund_fields.ends_with(&[
            "pstn_rc=t".to_string(),
            "pstn_rt=".to_string(),
            "paystation=_empty".to_string(),
        ]));
        assert!(!refund_fields.iter().any(|field| field.starts_with("pstn_mc=")));
    }

    #[test]
    fn unsupported_card_network_is_rejected() {
        let purchase = GatewayOperation::Purchase(PaymentsAuthorizeData {
            minor_amount: MinorUnit::new(100),
            payment_method_data: PaymentMethodData::Card(card("6011111111111117")),
            options: options(),
        });
        let data = router_data(purchase, false);
        let item = PaystationRouterData::from((None, &data));

        let error = PaystationPaymentsRequest::try_from(&item).unwrap_err();
        assert_eq!(
            error.current_context(),
            &errors::ConnectorError::NotSupported {
                message: "Discover cards".to_string(),
                connector: "paystation",
            }
        );
    }

    #[test]
    fn other_auth_types_are_rejected() {
        let result = PaystationAuthType::try_from(&ConnectorAuthType::HeaderKey {
            api_key: Secret::new("609035".to_string()),
        });
        assert!(result.is_err());
    }

    #[test]
    fn known_tags_match_their_derived_names() {
        for (tag, key) in RESPONSE_FIELD_KEYS {
            assert_eq!(utils::to_underscore(tag), *key, "{tag}");
        }
    }

    #[test]
    fn empty_elements_map_to_empty_strings() {
        let response = PaystationResponse::from_body(
            r#"<?xml version="1.0" standalone="yes"?>
            <response><ec>5</ec><em>Insufficient Funds</em><AuthorizeID/><NewField>x</NewField></response>"#,
        );
        let PaystationResponse::Reply(reply) = response else {
            panic!("expected a reply");
        };

        assert_eq!(reply.params.get("authorize_id").map(String::as_str), Some(""));
        assert_eq!(reply.params.get("new_field").map(String::as_str), Some("x"));
        assert!(!reply.is_success());
        assert_eq!(reply.get_message(), "Insufficient Funds");
    }

    #[test]
    fn code_falls_back_to_paystation_error_code() {
        let response = GatewayResponse::from(PaystationResponse::from_body(
            r#"<PaystationFuturePaymentResponse><PaystationErrorCode>34</PaystationErrorCode><PaystationErrorMessage>Future Payment Saved Ok</PaystationErrorMessage><tm>t</tm></PaystationFuturePaymentResponse>"#,
        ));

        assert!(response.success);
        assert!(response.test);
        assert_eq!(response.message, "Future Payment Saved Ok");
        assert_eq!(response.failure, None);
    }

    #[test]
    fn non_numeric_code_is_a_gateway_error() {
        let response = GatewayResponse::from(PaystationResponse::from_body(
            "<response><ec>OK</ec></response>",
        ));

        assert!(!response.success);
        assert_eq!(response.get_error_code(), Some("OK"));
        assert_eq!(response.message, consts::NO_ERROR_MESSAGE);
    }

    #[test]
    fn blank_code_is_a_gateway_error_with_fields_kept() {
        let response = GatewayResponse::from(PaystationResponse::from_body(
            "<response><ec/><em>Declined</em><TransactionID>T1</TransactionID></response>",
        ));

        assert!(!response.success);
        assert_eq!(
            response.failure,
            Some(FailureClassification::GatewayError {
                code: String::new()
            })
        );
        assert_eq!(response.message, "Declined");
        assert_eq!(response.authorization.as_deref(), Some("T1"));
        assert_eq!(response.get_param("transaction_id"), Some("T1"));
    }

    #[test]
    fn blank_ec_defers_to_paystation_error_code() {
        let response = PaystationResponse::from_body(
            "<response><ec> </ec><PaystationErrorCode>34</PaystationErrorCode></response>",
        );
        let PaystationResponse::Reply(reply) = response else {
            panic!("expected a reply");
        };

        assert_eq!(reply.get_error_code(), Some("34"));
        assert!(reply.is_success());
    }

    #[test]
    fn only_exact_success_codes_succeed() {
        for (code, success) in [
            ("0", true),
            ("34", true),
            (" 0 ", true),
            ("00", false),
            ("+0", false),
            ("034", false),
            ("5", false),
        ] {
            let response = GatewayResponse::from(PaystationResponse::from_body(&format!(
                "<response><ec>{code}</ec></response>"
            )));
            assert_eq!(response.success, success, "{code:?}");
        }
    }

    #[test]
    fn reply_debug_masks_future_payment_token() {
        let response = PaystationResponse::from_body(
            "<response><ec>34</ec><FuturePaymentToken>justatest1310263135</FuturePaymentToken></response>",
        );
        let formatted = format!("{response:?}");

        assert!(!formatted.contains("justatest1310263135"));
        assert!(formatted.contains("future_payment_token"));
        assert_eq!(
            GatewayResponse::from(response).token.as_deref(),
            Some("justatest1310263135")
        );
    }

    #[test]
    fn html_fragment_is_a_protocol_error() {
        let response = GatewayResponse::from(PaystationResponse::from_body(
            r#"<?xml version="1.0" standalone="yes"?>
      <FONT FACE="Arial" SIZE="2"><strong>Error 11:</strong> Not enough input parameters.</FONT>"#,
        ));

        assert!(!response.success);
        assert!(response.params.is_empty());
        assert_eq!(response.authorization, None);
        assert_eq!(response.message, "Error 11: Not enough input parameters.");
        assert_eq!(
            response.failure,
            Some(FailureClassification::ProtocolError {
                reason: "Error 11: Not enough input parameters.".to_string()
            })
        );
    }
}
