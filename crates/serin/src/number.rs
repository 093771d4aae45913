/// Format a finite f64 in canonical TOON form.
/// Requirements:
/// - no exponent notation
/// - no leading zeros except a single zero before the decimal point
/// - trailing fractional zeros trimmed, but a decimal point (and one digit)
///   always remains so float-tagged numbers never collapse to integer text
/// - -0 normalized to 0.0
pub(crate) fn format_canonical_f64(value: f64) -> String {
    if !value.is_finite() {
        // serde_json cannot represent non-finite numbers either; fold to null
        return String::from("null");
    }
    if value == 0.0 {
        return String::from("0.0");
    }

    let negative = value < 0.0;
    let magnitude = value.abs();

    let mut buf = ryu::Buffer::new();
    let raw = buf.format_finite(magnitude);
    let body = match raw.find(['e', 'E']) {
        Some(exp_index) => {
            let exp: i32 = raw[exp_index + 1..].parse().unwrap_or(0);
            expand_exponent(&raw[..exp_index], exp)
        }
        None => String::from(raw),
    };
    let mut out = trim_fraction(body);
    if !out.contains('.') {
        out.push_str(".0");
    }
    if negative {
        let mut signed = String::with_capacity(out.len() + 1);
        signed.push('-');
        signed.push_str(&out);
        signed
    } else {
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberKind {
    Int,
    Float,
}

/// Shape check for unquoted tokens. A token only goes through the numeric
/// parsers when this returns `Some`, which keeps `inf`, `nan` and other
/// strings that `f64::from_str` would accept out of the number space.
pub(crate) fn classify_numeric(s: &str) -> Option<NumberKind> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    let mut i = 0usize;
    if bytes[0] == b'-' || bytes[0] == b'+' {
        i = 1;
    }
    if i >= bytes.len() {
        return None;
    }
    let mut saw_digit = false;
    let mut has_dot = false;
    let mut has_exp = false;
    let mut exp_sign_slot = false;
    for &b in &bytes[i..] {
        match b {
            b'0'..=b'9' => {
                saw_digit = true;
                exp_sign_slot = false;
            }
            b'.' => {
                if has_dot || has_exp {
                    return None;
                }
                has_dot = true;
            }
            b'e' | b'E' => {
                if has_exp || !saw_digit {
                    return None;
                }
                has_exp = true;
                exp_sign_slot = true;
            }
            b'-' | b'+' => {
                if !exp_sign_slot {
                    return None;
                }
                exp_sign_slot = false;
            }
            _ => return None,
        }
    }
    if !saw_digit {
        return None;
    }
    if has_dot || has_exp {
        Some(NumberKind::Float)
    } else {
        Some(NumberKind::Int)
    }
}

fn expand_exponent(mantissa: &str, exp: i32) -> String {
    let mut digits = Vec::with_capacity(mantissa.len());
    let mut point_index = mantissa.len();
    for &b in mantissa.as_bytes() {
        if b == b'.' {
            point_index = digits.len();
        } else {
            digits.push(b);
        }
    }
    if point_index == mantissa.len() {
        point_index = digits.len();
    }

    if exp >= 0 {
        let target = point_index as i32 + exp;
        if target >= digits.len() as i32 {
            let mut result = String::with_capacity(target as usize);
            for &d in &digits {
                result.push(d as char);
            }
            let zeros = (target as usize).saturating_sub(digits.len());
            for _ in 0..zeros {
                result.push('0');
            }
            result
        } else {
            let split = target as usize;
            let mut result = String::with_capacity(digits.len() + 1);
            for (idx, &d) in digits.iter().enumerate() {
                if idx == split {
                    result.push('.');
                }
                result.push(d as char);
            }
            result
        }
    } else {
        let shift = (-exp) as usize;
        if shift >= point_index {
            let zeros = shift - point_index;
            let mut result = String::with_capacity(digits.len() + zeros + 2);
            result.push_str("0.");
            for _ in 0..zeros {
                result.push('0');
            }
            for &d in &digits {
                result.push(d as char);
            }
            result
        } else {
            let split = point_index - shift;
            let mut result = String::with_capacity(digits.len() + 1);
            for (idx, &d) in digits.iter().enumerate() {
                if idx == split {
                    result.push('.');
                }
                result.push(d as char);
            }
            result
        }
    }
}

/// Trim trailing fractional zeros while keeping at least one digit after the
/// decimal point.
fn trim_fraction(mut s: String) -> String {
    if let Some(dot_pos) = s.find('.') {
        let mut end = s.len();
        while end > dot_pos + 2 && s.as_bytes()[end - 1] == b'0' {
            end -= 1;
        }
        s.truncate(end);
    }
    s
}
