use crate::models::QueryParam;
use percent_encoding::percent_decode_str;

/// Splits a raw query into ordered `(label, value)` pairs.
///
/// Pairs without exactly one `=` or whose value fails to percent-decode are
/// dropped without affecting their neighbours. Duplicates are kept in order.
pub fn decode_query(query: &str) -> Vec<QueryParam> {
    query
        .split('&')
        .filter(|candidate| !candidate.is_empty())
        .filter_map(|candidate| {
            let mut parts = candidate.split('=');
            let label = parts.next()?;
            let value = parts.next()?;
            if parts.next().is_some() {
                return None;
            }
            let value = strict_percent_decode(value)?;
            Some(QueryParam::new(label, value))
        })
        .collect()
}

/// Rejects stray `%` signs and escapes that do not form valid UTF-8.
fn strict_percent_decode(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    let mut idx = 0;
    while let Some(offset) = bytes[idx..].iter().position(|b| *b == b'%') {
        let start = idx + offset;
        let well_formed = bytes
            .get(start + 1..start + 3)
            .map(|pair| pair.iter().all(u8::is_ascii_hexdigit))
            .unwrap_or(false);
        if !well_formed {
            return None;
        }
        idx = start + 3;
    }

    percent_decode_str(raw)
        .decode_utf8()
        .ok()
        .map(|value| value.into_owned())
}
