//! Line parsing for sequence input.

use crate::core::extrapolator::Sequence;

/// Parses whitespace-separated integers from one input line.
///
/// Reads integers left to right, skipping whitespace between them. Each
/// integer is an optional sign followed by ASCII digits; reading stops at
/// the first position where no integer can be read (or one overflows
/// `i64`), keeping everything read before it. So `"12abc"` yields `[12]`
/// and `"1 2, 3"` yields `[1, 2]`. A line with no leading integer yields an
/// empty sequence.
#[must_use]
pub fn parse_sequence(line: &str) -> Sequence {
    let mut values = Vec::new();
    let mut rest = line;
    while let Some((value, tail)) = leading_integer(rest.trim_start()) {
        values.push(value);
        rest = tail;
    }
    Sequence::new(values)
}

/// Splits the integer at the front of `s` from the text after it.
fn leading_integer(s: &str) -> Option<(i64, &str)> {
    let sign_len = usize::from(s.starts_with(|c| c == '+' || c == '-'));
    let digits_len = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    let end = sign_len + digits_len;
    let value = s[..end].parse().ok()?;
    Some((value, &s[end..]))
}
