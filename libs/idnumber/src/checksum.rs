//! Luhn (mod 10) check digit.

/// Computes the Luhn check digit that should be appended to `n`.
///
/// Starting from the rightmost digit of `n`, every second digit is doubled
/// (subtracting 9 when the result exceeds 9) and all digits are summed. The
/// check digit is the amount needed to bring that sum to a multiple of 10.
#[must_use]
pub fn compute_check_digit(n: u64) -> u8 {
    let mut sum = 0u64;
    let mut rest = n;
    let mut double = true;

    while rest > 0 {
        let mut digit = rest % 10;
        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        double = !double;
        rest /= 10;
    }

    ((10 - sum % 10) % 10) as u8
}

/// Returns true if the last digit of `n` is a valid Luhn check digit for the rest.
#[must_use]
pub fn is_valid(n: u64) -> bool {
    compute_check_digit(n / 10) == (n % 10) as u8
}
