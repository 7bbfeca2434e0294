use serde_json::Value;

/// Trims and collapses every whitespace run to a single space.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// Coerces a JSON value to a finite f64. Anything else becomes 0.
pub fn safe_number(v: &Value) -> f64 {
    let n = match v {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    };
    finite_or_zero(n)
}

#[inline]
pub fn finite_or_zero(n: f64) -> f64 {
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// Display formatting for scores and effect values.
///
/// Large magnitudes are rounded, mid-range values keep one decimal and small
/// values keep two, with trailing zeros dropped.
pub fn format_value(v: f64) -> String {
    let n = finite_or_zero(v);
    let abs = n.abs();
    if abs >= 1000.0 {
        // Halves round toward +inf.
        return format!("{}", (n + 0.5).floor() as i64);
    }
    if abs >= 100.0 {
        let s = format!("{:.1}", n);
        return s.strip_suffix(".0").map(str::to_string).unwrap_or(s);
    }
    let s = format!("{:.2}", n);
    if let Some(stripped) = s.strip_suffix(".00") {
        return stripped.to_string();
    }
    if s.ends_with('0') {
        return s[..s.len() - 1].to_string();
    }
    s
}

/// Lowercases and replaces runs of characters outside `[a-z0-9-_]` with `_`.
pub fn safe_filename(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut in_run = false;
    for c in lower.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_' {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }
    let trimmed: String = out.trim_matches('_').chars().take(60).collect();
    if trimmed.is_empty() {
        "result".to_string()
    } else {
        trimmed
    }
}
