//! Keyword matching of headers to roles.

use roster_model::{ResolvedSchema, Role};
use tracing::debug;

/// Whether a header contains any of `role`'s keywords.
///
/// Comparison is on the lower-cased header with punctuation and whitespace
/// removed, so `"E-mail"` and `"Zip/Postal"` match like their plain forms.
/// Removing whitespace also joins words: `"Web Site"` matches `website`
/// and `"Zip Code"` matches `zip`. A keyword split across words still
/// counts as a match.
pub fn header_matches(role: Role, header: &str) -> bool {
    let normalized = compact_header(header);
    role.keywords()
        .iter()
        .any(|keyword| normalized.contains(keyword))
}

fn compact_header(header: &str) -> String {
    header
        .chars()
        .filter(|ch| ch.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Resolves roles against `columns`, scanning headers in the given order.
///
/// The first matching header wins each role; the original header text is
/// kept. Unmatched roles stay unresolved, except `Name`, which falls back
/// to the first column when there is one.
pub fn resolve_roles<S: AsRef<str>>(columns: &[S]) -> ResolvedSchema {
    let mut schema = ResolvedSchema::new();
    for role in Role::ALL {
        let matched = columns
            .iter()
            .map(AsRef::as_ref)
            .find(|header| header_matches(role, header));
        let chosen = match matched {
            Some(header) => Some(header),
            None if role.falls_back_to_first_column() => columns.first().map(AsRef::as_ref),
            None => None,
        };
        match chosen {
            Some(header) => {
                schema.assign(role, header);
                debug!(role = %role, column = header, fallback = matched.is_none(), "resolved role");
            }
            None => debug!(role = %role, "role unresolved"),
        }
    }
    schema
}
