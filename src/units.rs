//! Display helpers for human-readable balances.

/// Fractional digits shown for balances.
const DISPLAY_DECIMALS: usize = 4;

/// Largest exponent magnitude accepted in `1e5`-style input.
const MAX_EXPONENT: usize = 1_000;

/// Formats a decimal balance string for display.
///
/// Rounds half-up to four decimal places, strips trailing zeros and groups
/// the integer part in thousands.  Plain decimals and exponent notation
/// (`"1.5e3"`) are accepted; anything else yields `"0"`.  The arithmetic is
/// done on the digit string, so balances of any size format exactly.
///
/// # Examples
///
/// ```
/// use hydra_swap::units::format_balance;
///
/// assert_eq!(format_balance("10000.100684"), "10,000.1007");
/// assert_eq!(format_balance("0.00004"), "0");
/// assert_eq!(format_balance("1e5"), "100,000");
/// assert_eq!(format_balance("n/a"), "0");
/// ```
#[must_use]
pub fn format_balance(balance: &str) -> String {
    let Some((negative, int_part, frac_part)) = split_decimal(balance.trim()) else {
        return "0".to_owned();
    };
    let (int_part, frac_part) = (int_part.as_str(), frac_part.as_str());

    // Integer digits followed by exactly DISPLAY_DECIMALS fractional digits.
    let mut digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    digits.extend(
        frac_part
            .bytes()
            .map(|b| b - b'0')
            .chain(core::iter::repeat(0))
            .take(DISPLAY_DECIMALS),
    );
    let round_up = frac_part
        .as_bytes()
        .get(DISPLAY_DECIMALS)
        .is_some_and(|&b| b >= b'5');
    if round_up && increment(&mut digits) {
        digits.insert(0, 1);
    }

    let split = digits.len() - DISPLAY_DECIMALS;
    let (int_digits, frac_digits) = digits.split_at(split);
    let frac_len = frac_digits.iter().rposition(|&d| d != 0).map_or(0, |i| i + 1);
    let first_nonzero = int_digits.iter().position(|&d| d != 0);

    let mut out = String::new();
    let is_zero = first_nonzero.is_none() && frac_len == 0;
    if negative && !is_zero {
        out.push('-');
    }
    match first_nonzero {
        Some(start) => out.push_str(&group_thousands(&int_digits[start..])),
        None => out.push('0'),
    }
    if frac_len > 0 {
        out.push('.');
        out.extend(frac_digits[..frac_len].iter().map(|&d| char::from(b'0' + d)));
    }
    out
}

/// Splits `[-+]digits[.digits][e[-+]digits]` into sign, integer and
/// fraction digits, with the exponent already applied.
///
/// Empty parts read as zero.  Returns `None` for anything else.
fn split_decimal(input: &str) -> Option<(bool, String, String)> {
    let (negative, body) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };
    let (mantissa, exponent) = match body.split_once(['e', 'E']) {
        Some((m, e)) => (m, Some(e)),
        None => (body, None),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }
    let Some(exponent) = exponent else {
        return Some((negative, int_part.to_owned(), frac_part.to_owned()));
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    let (shift_left, magnitude) = match exponent.as_bytes().first() {
        Some(b'-') => (true, &exponent[1..]),
        Some(b'+') => (false, &exponent[1..]),
        _ => (false, exponent),
    };
    if magnitude.is_empty() || !all_digits(magnitude) {
        return None;
    }
    let shift: usize = magnitude.parse().ok().filter(|&n| n <= MAX_EXPONENT)?;

    let digits = format!("{int_part}{frac_part}");
    let point = if shift_left {
        int_part.len() as isize - shift as isize
    } else {
        (int_part.len() + shift) as isize
    };
    let (int_digits, frac_digits) = if point <= 0 {
        (String::new(), format!("{}{digits}", "0".repeat(point.unsigned_abs())))
    } else if point.unsigned_abs() >= digits.len() {
        (format!("{digits}{}", "0".repeat(point.unsigned_abs() - digits.len())), String::new())
    } else {
        let (i, f) = digits.split_at(point.unsigned_abs());
        (i.to_owned(), f.to_owned())
    };
    Some((negative, int_digits, frac_digits))
}

/// Adds one to a big-endian digit vector; returns `true` on carry out.
fn increment(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return false;
        }
    }
    true
}

fn group_thousands(digits: &[u8]) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, &d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(char::from(b'0' + d));
    }
    out
}
