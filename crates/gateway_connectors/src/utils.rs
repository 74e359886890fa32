use common_enums::Currency;
use common_utils::types::{AmountConvertor, MinorUnit};
use error_stack::ResultExt;
use gateway_interfaces::errors;

pub(crate) fn convert_amount<T>(
    amount_convertor: &dyn AmountConvertor<Output = T>,
    amount: MinorUnit,
    currency: Currency,
) -> Result<T, error_stack::Report<errors::ConnectorError>> {
    amount_convertor
        .convert(amount, currency)
        .change_context(errors::ConnectorError::AmountConversionFailed)
}

/// Snake-case form of a CamelCase tag. A run of capitals is an acronym and splits from the word
/// after it: `PaystationTransactionID` becomes `paystation_transaction_id`, `QSIResponseCode`
/// becomes `qsi_response_code`.
pub fn to_underscore(tag: &str) -> String {
    let chars = tag.chars().collect::<Vec<_>>();
    let mut underscored = String::with_capacity(tag.len() + 4);

    for (index, &current) in chars.iter().enumerate() {
        let previous = index.checked_sub(1).and_then(|previous| chars.get(previous));

        if let Some(previous) = previous.filter(|_| current.is_ascii_uppercase()) {
            let next_is_lower = chars
                .get(index + 1)
                .is_some_and(|next| next.is_ascii_lowercase());

            if previous.is_ascii_lowercase()
                || previous.is_ascii_digit()
                || (previous.is_ascii_uppercase() && next_is_lower)
            {
                underscored.push('_');
            }
        }

        match current {
            '-' => underscored.push('_'),
            other => underscored.push(other.to_ascii_lowercase()),
        }
    }

    underscored
}
