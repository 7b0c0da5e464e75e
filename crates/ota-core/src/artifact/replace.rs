//! Rightmost substring replacement.

/// Replaces the last occurrence of `search` in `s` with `replace`.
///
/// Occurrences are counted without overlap. With at most one, this is a
/// plain first-match substitution (`"aaa"`, `"aa"` -> `"Xa"`); otherwise the
/// rightmost match is replaced. An empty `search` leaves `s` unchanged.
pub fn replace_last(s: &str, search: &str, replace: &str) -> String {
    if search.is_empty() {
        return s.to_string();
    }
    if s.matches(search).count() <= 1 {
        return s.replacen(search, replace, 1);
    }
    match s.rfind(search) {
        Some(idx) => {
            let mut out = String::with_capacity(s.len() - search.len() + replace.len());
            out.push_str(&s[..idx]);
            out.push_str(replace);
            out.push_str(&s[idx + search.len()..]);
            out
        }
        None => s.to_string(),
    }
}
