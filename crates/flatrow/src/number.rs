/// Format a finite f64 for table display.
/// Requirements:
/// - no exponent notation
/// - no trailing fractional zeros (strip decimal point if none remains)
/// - -0 normalized to 0
pub(crate) fn format_canonical_f64(value: f64) -> String {
    if !value.is_finite() {
        debug_assert!(false, "format_canonical_f64 called with non-finite value");
        return String::from("null");
    }
    if value == 0.0 {
        return String::from("0");
    }

    let negative = value < 0.0;
    let magnitude = value.abs();

    let mut buf = ryu::Buffer::new();
    let raw = buf.format_finite(magnitude);
    let body = if let Some(exp_index) = raw.find(['e', 'E']) {
        let mantissa = &raw[..exp_index];
        let exp: i32 = raw[exp_index + 1..].parse().unwrap_or(0);
        expand_exponent(mantissa, exp)
    } else {
        String::from(raw)
    };
    let trimmed = trim_fraction(body);
    if trimmed == "0" {
        return String::from("0");
    }
    if negative {
        format!("-{}", trimmed)
    } else {
        trimmed
    }
}

/// Rewrite `mantissa * 10^exp` as plain decimal digits.
fn expand_exponent(mantissa: &str, exp: i32) -> String {
    let mut digits: Vec<u8> = Vec::with_capacity(mantissa.len());
    let mut point = mantissa.len();
    for &b in mantissa.as_bytes() {
        if b == b'.' {
            point = digits.len();
        } else {
            digits.push(b);
        }
    }
    if point == mantissa.len() {
        point = digits.len();
    }

    let target = point as i32 + exp;
    let mut out = String::with_capacity(digits.len() + exp.unsigned_abs() as usize + 2);
    if target <= 0 {
        out.push_str("0.");
        for _ in 0..(-target) {
            out.push('0');
        }
        for &d in &digits {
            out.push(d as char);
        }
    } else {
        for (idx, &d) in digits.iter().enumerate() {
            if idx == target as usize {
                out.push('.');
            }
            out.push(d as char);
        }
        for _ in digits.len()..target as usize {
            out.push('0');
        }
    }
    out
}

fn trim_fraction(mut s: String) -> String {
    if let Some(dot) = s.find('.') {
        let mut end = s.len();
        while end > dot + 1 && s.as_bytes()[end - 1] == b'0' {
            end -= 1;
        }
        if s.as_bytes()[end - 1] == b'.' {
            end -= 1;
        }
        s.truncate(end);
    }
    s
}
