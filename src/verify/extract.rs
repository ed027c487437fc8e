use once_cell::sync::Lazy;
use regex::Regex;

use crate::api::models::PartialInput;
use crate::verify::validate::normalize_phone;

static NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[가-힣]{2,4}$").expect("name regex"));
static PASSCODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^P[0-9]{12}$").expect("passcode regex"));
static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^010(?:[0-9]{8}|-[0-9]{4}-[0-9]{4})$").expect("phone regex"));

/// Pull name, clearance code and phone out of pasted text.
///
/// Tokens are whitespace separated. Each token lands in at most one field,
/// tested in name, passcode, phone order; a later match for the same field
/// replaces an earlier one.
pub fn extract(text: &str) -> PartialInput {
    let mut found = PartialInput::default();
    for token in text.split_whitespace() {
        if NAME.is_match(token) {
            found.name = Some(token.to_string());
        } else if PASSCODE.is_match(token) {
            found.passcode = Some(token.to_string());
        } else if PHONE.is_match(token) {
            found.phone = Some(normalize_phone(token));
        }
    }
    found
}
