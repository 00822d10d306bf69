/// Expected result of `myfunc(s, t)`.
pub fn reference_answer(s: f64, t: f64) -> f64 {
    s + t - 5.0
}

/// Render a float for the `ans:` section.
///
/// Integral values keep a trailing `.0`, very large (>= 1e16) and very small (< 1e-4)
/// magnitudes switch to scientific notation with a signed two-digit exponent (`1.0e+16`).
pub fn display(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v.is_sign_negative() { "-Infinity" } else { "Infinity" }.to_string();
    }

    let abs = v.abs();
    if abs == 0.0 || (1e-4..1e16).contains(&abs) {
        let mut repr = format!("{v}");
        if !repr.contains('.') {
            repr.push_str(".0");
        }
        return repr;
    }

    let sci = format!("{v:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or_default();
    let sign = if exp < 0 { '-' } else { '+' };
    if mantissa.contains('.') {
        format!("{mantissa}e{sign}{:02}", exp.abs())
    } else {
        format!("{mantissa}.0e{sign}{:02}", exp.abs())
    }
}
