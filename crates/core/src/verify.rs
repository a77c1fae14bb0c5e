use subtle::ConstantTimeEq;

/// Compares a submitted verification code against the configured secret in
/// constant time. Slices of unequal length compare unequal.
pub fn code_matches(supplied: &str, secret: &str) -> bool {
    supplied.as_bytes().ct_eq(secret.as_bytes()).into()
}
