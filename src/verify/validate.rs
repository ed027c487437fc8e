use once_cell::sync::Lazy;
use regex::Regex;

use crate::api::models::{InputRecord, NormalizedInput};
use crate::error::ValidationError;

static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^010[0-9]{8}$|^010-[0-9]{4}-[0-9]{4}$").expect("phone regex"));

/// Drop hyphens and whitespace anywhere in a phone number.
pub fn normalize_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect()
}

/// Check a submission and return it normalized. Stops at the first failure.
pub fn validate(input: &InputRecord) -> Result<NormalizedInput, ValidationError> {
    let name = input.name.trim();
    let passcode = input.passcode.trim();
    let phone = input.phone.trim();

    if name.is_empty() || passcode.is_empty() || phone.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !PHONE.is_match(phone) {
        return Err(ValidationError::InvalidPhone);
    }

    Ok(NormalizedInput {
        name: name.to_string(),
        passcode: passcode.to_string(),
        phone: normalize_phone(phone),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hyphenated_phone_and_normalizes() {
        let ok = validate(&InputRecord::new("홍길동", "P123456789012", "010-1234-5678")).unwrap();
        assert_eq!(ok.name, "홍길동");
        assert_eq!(ok.passcode, "P123456789012");
        assert_eq!(ok.phone, "01012345678");
    }

    #[test]
    fn trims_every_field() {
        let ok = validate(&InputRecord::new("  홍길동 ", "\tP123456789012\n", " 01012345678 ")).unwrap();
        assert_eq!(ok.name, "홍길동");
        assert_eq!(ok.passcode, "P123456789012");
        assert_eq!(ok.phone, "01012345678");
    }

    #[test]
    fn blank_fields_are_missing() {
        let cases = [
            ("", "P123456789012", "01012345678"),
            ("홍길동", "   ", "01012345678"),
            ("홍길동", "P123456789012", ""),
            (" ", " ", " "),
        ];
        for (name, passcode, phone) in cases {
            assert_eq!(
                validate(&InputRecord::new(name, passcode, phone)),
                Err(ValidationError::MissingFields),
                "{name:?} {passcode:?} {phone:?}"
            );
        }
    }

    #[test]
    fn missing_fields_checked_before_phone_shape() {
        assert_eq!(
            validate(&InputRecord::new("", "P123456789012", "bogus")),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn rejects_other_phone_shapes() {
        for phone in [
            "011-1234-5678",
            "0101234567",
            "010123456789",
            "010-123-45678",
            "010 1234 5678",
            "0101234-5678",
            "010-12345678",
            "+82-10-1234-5678",
            "010-abcd-5678",
            "０１０12345678",
        ] {
            assert_eq!(
                validate(&InputRecord::new("홍길동", "P123456789012", phone)),
                Err(ValidationError::InvalidPhone),
                "{phone}"
            );
        }
    }

    #[test]
    fn passcode_and_name_shape_not_enforced() {
        let ok = validate(&InputRecord::new("John", "X1", "01012345678")).unwrap();
        assert_eq!(ok.passcode, "X1");
    }
}
