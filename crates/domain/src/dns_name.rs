//! Name rules applied before a lookup touches the network.

/// Longest name, in characters, that may be put on the wire.
pub const MAX_NAME_LEN: usize = 255;

/// Longest single label (RFC 1035 §2.3.4).
pub const MAX_LABEL_LEN: usize = 63;

/// Basic domain-name syntax check (RFC 1035, RFC 3696).
///
/// Labels consist of ASCII letters, digits, `-` and `_`. Empty labels are
/// rejected except for a single trailing root dot, a label may not start or
/// end with a hyphen, and the name must contain at least one non-digit
/// character so that dotted quads are not taken for names.
pub fn is_domain_name(s: &str) -> bool {
    if s.is_empty() || s.len() > MAX_NAME_LEN {
        return false;
    }

    let mut last = b'.';
    let mut has_letter = false;
    let mut label_len = 0;

    for &c in s.as_bytes() {
        match c {
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                has_letter = true;
                label_len += 1;
            }
            b'0'..=b'9' => label_len += 1,
            b'-' => {
                if last == b'.' {
                    return false;
                }
                label_len += 1;
            }
            b'.' => {
                if last == b'.' || last == b'-' {
                    return false;
                }
                if label_len > MAX_LABEL_LEN || label_len == 0 {
                    return false;
                }
                label_len = 0;
            }
            _ => return false,
        }
        last = c;
    }

    if last == b'-' || label_len > MAX_LABEL_LEN {
        return false;
    }

    has_letter
}

/// A name is rooted when it carries the trailing root label.
pub fn is_rooted(name: &str) -> bool {
    name.ends_with('.')
}

pub fn count_dots(name: &str) -> usize {
    name.bytes().filter(|&b| b == b'.').count()
}

/// Returns `name` with a trailing dot, appending one if absent.
pub fn to_rooted(name: &str) -> String {
    if is_rooted(name) {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

/// Case-insensitive comparison that ignores the trailing root dot.
pub fn names_equal(a: &str, b: &str) -> bool {
    a.trim_end_matches('.')
        .eq_ignore_ascii_case(b.trim_end_matches('.'))
}
