//!
//! # Resource names
//!
//! RFC 1123 name checks used for object and node pool names.
//!

/// max length of a DNS subdomain
pub const DNS1123_SUBDOMAIN_MAX_LEN: usize = 253;

const SUBDOMAIN_FORMAT_MSG: &str = "a lowercase RFC 1123 subdomain must consist of lower case alphanumeric characters, '-' or '.', and must start and end with an alphanumeric character";

/// Checks that `name` is a DNS-1123 subdomain.
///
/// Returns one message per rule broken; an empty list means the name is valid.
///
/// ```
/// use cluster_admission::name::is_dns1123_subdomain;
///
/// assert!(is_dns1123_subdomain("es-data.logs").is_empty());
/// assert!(!is_dns1123_subdomain("Es_Data").is_empty());
/// ```
pub fn is_dns1123_subdomain(name: &str) -> Vec<String> {
    let mut errors = vec![];
    if name.len() > DNS1123_SUBDOMAIN_MAX_LEN {
        errors.push(format!(
            "must be no more than {DNS1123_SUBDOMAIN_MAX_LEN} characters"
        ));
    }
    if !name.split('.').all(is_label) {
        errors.push(SUBDOMAIN_FORMAT_MSG.to_owned());
    }
    errors
}

fn is_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            is_alphanumeric(*first)
                && is_alphanumeric(*last)
                && bytes.iter().all(|b| is_alphanumeric(*b) || *b == b'-')
        }
        _ => false,
    }
}

fn is_alphanumeric(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit()
}

#[cfg(test)]
mod test {
    use super::is_dns1123_subdomain;

    #[test]
    fn allows_valid_names() {
        let names = vec![
            "a",
            "es-data",
            "es-master-0",
            "logs.search.internal",
            "0-starts-with-digit",
            "x.y-z.9",
        ];

        for name in names {
            assert!(is_dns1123_subdomain(name).is_empty(), "{name}");
        }
    }

    #[test]
    fn rejects_invalid_characters() {
        let names = vec![
            "",
            "Data",
            "es_data",
            "es data",
            "-leading",
            "trailing-",
            "double..dot",
            ".leading-dot",
            "trailing-dot.",
            "label-.bad",
        ];

        for name in names {
            assert_eq!(is_dns1123_subdomain(name).len(), 1, "{name}");
        }
    }

    #[test]
    fn rejects_long_names() {
        let name = format!("{}.{}", "a".repeat(200), "b".repeat(60));
        let errors = is_dns1123_subdomain(&name);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("253"));

        let name = "a".repeat(254);
        assert!(!is_dns1123_subdomain(&name).is_empty());
    }
}
