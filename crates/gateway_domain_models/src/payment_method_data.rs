use cards::{CardExpiration, CardNumber, CardSecurityCode};
use common_enums::CardNetwork;
use masking::Secret;
use serde::{Deserialize, Serialize};

/// How the customer pays: a raw card, or a token the vendor issued for a card stored earlier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodData {
    Card(Card),
    StoredToken(Secret<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub card_number: CardNumber,
    pub card_exp_month: cards::CardExpirationMonth,
    pub card_exp_year: cards::CardExpirationYear,
    pub card_cvc: Option<CardSecurityCode>,
    pub card_network: Option<CardNetwork>,
    pub card_holder_name: Option<Secret<String>>,
}

impl Card {
    /// Expiry as `yymm`.
    pub fn get_expiry_yymm(&self) -> String {
        CardExpiration {
            month: self.card_exp_month.clone(),
            year: self.card_exp_year.clone(),
        }
        .yymm()
    }

    /// The brand given with the card, otherwise the one its number belongs to.
    pub fn get_card_network(&self) -> Option<CardNetwork> {
        self.card_network
            .or_else(|| self.card_number.get_card_network())
    }
}
