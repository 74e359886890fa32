#![allow(dead_code, clippy::unwrap_used, clippy::panic_in_result_fn)]

use masking as pii;

#[test]
fn basic() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use pii::{Secret, SerializableSecret};
    use serde::Serialize;

    #[derive(Clone, Debug, Serialize, PartialEq, Eq)]
    pub struct GatewayId(String);

    impl SerializableSecret for GatewayId {}

    #[derive(Clone, Debug, Serialize, PartialEq, Eq)]
    pub struct Credentials {
        gateway_id: Secret<GatewayId>,
        account: String,
    }

    // construct

    let credentials = Credentials {
        gateway_id: Secret::new(GatewayId("PUSHPAY".to_string())),
        account: "609035".to_string(),
    };

    // clone

    let credentials2 = credentials.clone();
    assert_eq!(credentials, credentials2);

    // format

    let got = format!("{:?}", credentials);
    let exp = "Credentials { gateway_id: *** basic::basic::GatewayId ***, account: \"609035\" }";
    assert_eq!(got, exp);

    // serialize

    let got = serde_json::to_string(&credentials).unwrap();
    let exp = "{\"gateway_id\":\"PUSHPAY\",\"account\":\"609035\"}";
    assert_eq!(got, exp);

    Ok(())
}

#[test]
fn deserialize_and_expose() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use pii::{ExposeInterface, ExposeOptionInterface, PeekInterface, Secret, WithoutType};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct Auth {
        api_key: Secret<String, WithoutType>,
        key1: Option<Secret<String>>,
    }

    let auth: Auth = serde_json::from_str(r#"{"api_key":"609035","key1":"PUSHPAY"}"#)?;

    assert_eq!(format!("{:?}", auth.api_key), "*** ***");
    assert_eq!(auth.api_key.peek(), "609035");
    assert_eq!(auth.api_key.expose(), "609035");
    assert_eq!(auth.key1.expose_option().as_deref(), Some("PUSHPAY"));

    Ok(())
}

#[test]
fn strong_secret_formats_like_secret() {
    use std::str::FromStr;

    use pii::{PeekInterface, StrongSecret};

    let cvc = StrongSecret::<String>::from_str("123").unwrap();
    assert_eq!(format!("{cvc:?}"), "*** alloc::string::String ***");
    assert_eq!(cvc.peek(), "123");
}

#[test]
fn scrubs_form_body() {
    use pii::{FormScrubber, RedactionRule};

    const RULES: &[RedactionRule] = &[RedactionRule::filtered("card")];
    let body = "amount=100&card=4111111111111111&currency=NZD";

    assert_eq!(
        FormScrubber::new(RULES).scrub(body),
        "amount=100&card=[FILTERED]&currency=NZD"
    );
}
