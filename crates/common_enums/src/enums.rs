#[allow(clippy::upper_case_acronyms)]
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
)]
pub enum Currency {
    AUD,
    CAD,
    CHF,
    CNY,
    EUR,
    FJD,
    GBP,
    HKD,
    JPY,
    KRW,
    KWD,
    #[default]
    NZD,
    OMR,
    SGD,
    USD,
    WST,
    XPF,
}

/// Card brands a connector may accept.
#[allow(clippy::upper_case_acronyms)]
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum CardNetwork {
    Visa,
    Mastercard,
    AmericanExpress,
    DinersClub,
    Discover,
    JCB,
    UnionPay,
    Maestro,
}
