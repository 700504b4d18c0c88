/// Render a number the way a sheet shows it: integral values without a
/// fractional part (`3`), others as-is (`3.5`).
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
