use super::formatter;
use crate::consts;
use serde::Serialize;

/// Normalized values of every input in the card form.
///
/// The fields are private so the only way in is through the formatters.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct FieldSet {
    card_number: String,
    expiry: String,
    cvv: String,
    holder_name: String,
    agreed: bool,
}

impl FieldSet {
    pub fn with_card_number(self, raw: &str) -> Self {
        Self {
            card_number: formatter::format_card_number(raw),
            ..self
        }
    }

    pub fn with_expiry(self, raw: &str) -> Self {
        Self {
            expiry: formatter::format_expiry(raw),
            ..self
        }
    }

    pub fn with_cvv(self, raw: &str) -> Self {
        Self {
            cvv: formatter::format_cvv(raw),
            ..self
        }
    }

    pub fn with_holder_name(self, raw: &str) -> Self {
        Self {
            holder_name: formatter::format_holder_name(raw),
            ..self
        }
    }

    pub fn with_agreed(self, agreed: bool) -> Self {
        Self { agreed, ..self }
    }

    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    pub fn expiry(&self) -> &str {
        &self.expiry
    }

    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn agreed(&self) -> bool {
        self.agreed
    }

    pub fn is_valid(&self) -> bool {
        compute_validity(self)
    }
}

/// True only when every field is complete and the terms were accepted
pub fn compute_validity(fields: &FieldSet) -> bool {
    fields.card_number.len() == consts::CARD_NUMBER_FORMATTED_LEN
        && fields.expiry.len() == consts::EXPIRY_FORMATTED_LEN
        && fields.cvv.len() == consts::CVV_DIGITS
        && fields.holder_name.chars().count() >= consts::HOLDER_NAME_MIN_LEN
        && fields.agreed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> FieldSet {
        FieldSet::default()
            .with_card_number("4111111111111111")
            .with_expiry("1228")
            .with_cvv("123")
            .with_holder_name("IVAN IVANOV")
            .with_agreed(true)
    }

    #[test]
    fn test_valid_fields() {
        let fields = valid_fields();

        assert_eq!(fields.card_number(), "4111 1111 1111 1111");
        assert_eq!(fields.expiry(), "12/28");
        assert!(compute_validity(&fields));
    }

    #[test]
    fn test_default_fields_are_invalid() {
        assert!(!FieldSet::default().is_valid());
    }

    #[test]
    fn test_short_card_number_is_invalid() {
        assert!(!valid_fields().with_card_number("411111111111111").is_valid());
    }

    #[test]
    fn test_partial_expiry_is_invalid() {
        assert!(!valid_fields().with_expiry("122").is_valid());
        assert!(!valid_fields().with_expiry("12").is_valid());
    }

    #[test]
    fn test_short_cvv_is_invalid() {
        assert!(!valid_fields().with_cvv("12").is_valid());
    }

    #[test]
    fn test_short_holder_name_is_invalid() {
        assert!(!valid_fields().with_holder_name("Al").is_valid());
        assert!(valid_fields().with_holder_name("Ali").is_valid());
        // digits are stripped before the length check
        assert!(!valid_fields().with_holder_name("A1l2").is_valid());
    }

    #[test]
    fn test_terms_not_accepted_is_invalid() {
        assert!(!valid_fields().with_agreed(false).is_valid());
    }

    #[test]
    fn test_raw_input_never_persists() {
        let fields = FieldSet::default()
            .with_card_number("4111-1111")
            .with_cvv("1a2")
            .with_holder_name("jo3hn");

        assert_eq!(fields.card_number(), "4111 1111");
        assert_eq!(fields.cvv(), "12");
        assert_eq!(fields.holder_name(), "JOHN");
    }
}
