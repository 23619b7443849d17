use std::fmt;

/// Phone number in E.164 form, as accepted by the messaging API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalizes a free-form US phone number.
///
/// Every non-digit is dropped. Ten digits get a `+1` prefix, eleven digits
/// starting with `1` get a `+` prefix. Any other digit count cannot be
/// normalized.
pub fn normalize_phone(raw: &str) -> Option<PhoneNumber> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    match digits.len() {
        10 => Some(PhoneNumber(format!("+1{digits}"))),
        11 if digits.starts_with('1') => Some(PhoneNumber(format!("+{digits}"))),
        _ => None,
    }
}
