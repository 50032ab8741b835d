//! Midpoint between two digit strings
//!
//! Digit strings are read as fractions after an implied radix point, so
//! `"5"` is one half in base 10 and `"5" < "51" < "6"`. An empty lower
//! bound stands for zero and an empty upper bound for one.

use crate::alphabet::Alphabet;

/// A digit string strictly between `a` and `b`
///
/// `b` empty means "no upper bound". When `b` is non-empty the caller must
/// ensure `a < b`. If neither input ends in the alphabet's zero digit, the
/// result does not either.
pub fn midpoint(alphabet: &Alphabet, a: &str, b: &str) -> String {
    let mut out = Vec::with_capacity(a.len().max(b.len()) + 1);
    midpoint_into(alphabet, a.as_bytes(), b.as_bytes(), &mut out);
    out.into_iter().map(char::from).collect()
}

fn midpoint_into(alphabet: &Alphabet, mut a: &[u8], mut b: &[u8], out: &mut Vec<u8>) {
    if !b.is_empty() {
        // strip the common prefix, reading `a` as padded with zeros
        let zero = alphabet.first();
        let common = b
            .iter()
            .enumerate()
            .take_while(|&(i, &d)| a.get(i).copied().unwrap_or(zero) == d)
            .count();
        out.extend_from_slice(&b[..common]);
        a = a.get(common..).unwrap_or_default();
        b = &b[common..];
    }

    let digit_a = a.first().map_or(0, |&d| alphabet.rank(d));
    let digit_b = b.first().map_or(alphabet.len(), |&d| alphabet.rank(d));

    if digit_b > digit_a + 1 {
        out.push(alphabet.digit((digit_a + digit_b + 1) / 2));
        return;
    }

    // first digits are adjacent
    if b.len() > 1 {
        out.push(b[0]);
        return;
    }

    // `b` is a single digit or unbounded, so the answer has to continue past
    // `a`'s first digit: midpoint("49", "5") = "4" + midpoint("9", "")
    out.push(alphabet.digit(digit_a));
    midpoint_into(alphabet, a.get(1..).unwrap_or_default(), &[], out);
}
