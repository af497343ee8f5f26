use std::cmp::Ordering;

/// Compares strings so that embedded numbers sort by value: `"file2"`
/// sorts before `"file11"`.
///
/// Runs of ASCII digits are compared by numeric value; equal values with
/// different spellings put the shorter run first (`"0" < "00"`). All other
/// characters compare by code point, and a string sorts before any longer
/// string it is a prefix of.
///
/// ```
/// use libgraphql_language::natural_compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(natural_compare("2", "11"), Ordering::Less);
/// assert_eq!(natural_compare("02", "11"), Ordering::Less);
/// assert_eq!(natural_compare("0", "00"), Ordering::Less);
/// ```
pub fn natural_compare(a: &str, b: &str) -> Ordering {
    // Multi-byte UTF-8 sequences never contain ASCII bytes, and byte order
    // matches code point order, so comparing bytes is exact.
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let a_end = digit_run_end(a, i);
            let b_end = digit_run_end(b, j);
            match compare_digit_runs(&a[i..a_end], &b[j..b_end]) {
                Ordering::Equal => (),
                ord => return ord,
            }
            i = a_end;
            j = b_end;
        } else {
            match a[i].cmp(&b[j]) {
                Ordering::Equal => (),
                ord => return ord,
            }
            i += 1;
            j += 1;
        }
    }

    (a.len() - i).cmp(&(b.len() - j))
}

fn digit_run_end(bytes: &[u8], start: usize) -> usize {
    start
        + bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
}

/// Compares digit runs by value without parsing them, so arbitrarily long
/// runs cannot overflow.
fn compare_digit_runs(a: &[u8], b: &[u8]) -> Ordering {
    let a_digits = strip_leading_zeros(a);
    let b_digits = strip_leading_zeros(b);
    a_digits
        .len()
        .cmp(&b_digits.len())
        .then_with(|| a_digits.cmp(b_digits))
        .then_with(|| a.len().cmp(&b.len()))
}

fn strip_leading_zeros(digits: &[u8]) -> &[u8] {
    let zeros = digits.iter().take_while(|b| **b == b'0').count();
    &digits[zeros..]
}
