//! Local-to-international phone conversion

/// Country code substituted for the leading trunk `0`.
pub const KENYA_COUNTRY_CODE: &str = "254";

/// Converts a local `07XXXXXXXX` / `01XXXXXXXX` number into `254` form.
///
/// Returns `None` for anything that is not a 10-digit local number,
/// including numbers already in international form.
pub fn normalize_local_phone(value: &str) -> Option<String> {
    let rest = value.strip_prefix('0')?;

    if rest.len() != 9 || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !rest.starts_with('7') && !rest.starts_with('1') {
        return None;
    }

    Some(format!("{KENYA_COUNTRY_CODE}{rest}"))
}
