//! Placeholder syntactic checks. They are intentionally weak: callers that
//! need real address or phone grammars must not rely on them.

const PHONE_NUMBER_LEN: usize = 10;

/// True iff `s` contains at least one `@`. No trimming or case folding.
pub fn is_valid_email(s: &str) -> bool {
    s.contains('@')
}

/// True iff `s` is exactly ten characters long, counted in `char`s.
/// Digits and non-digits are treated alike.
pub fn is_valid_phone_number(s: &str) -> bool {
    s.chars().count() == PHONE_NUMBER_LEN
}
