use proptest::prelude::*;
use roster_map::resolve_roles;
use roster_model::Role;

#[test]
fn resolves_mixed_roster_headers() {
    let headers = ["Full Name", "City ", "State", "Phone #", "E-mail"];
    let schema = resolve_roles(&headers);

    assert_eq!(schema.column(Role::Name), Some("Full Name"));
    assert_eq!(schema.column(Role::City), Some("City "));
    assert_eq!(schema.column(Role::State), Some("State"));
    assert_eq!(schema.column(Role::Phone), Some("Phone #"));
    assert_eq!(schema.column(Role::Email), Some("E-mail"));
    assert_eq!(schema.column(Role::Website), None);
    assert_eq!(schema.column(Role::ZipCode), None);
}

#[test]
fn resolution_ignores_header_punctuation() {
    let schema = resolve_roles(&["Web-Site", "ZIP/Postal", "Cell (Mobile)"]);
    assert_eq!(schema.column(Role::Website), Some("Web-Site"));
    assert_eq!(schema.column(Role::ZipCode), Some("ZIP/Postal"));
    assert_eq!(schema.column(Role::Phone), Some("Cell (Mobile)"));
    assert_eq!(schema.column(Role::Name), Some("Web-Site"));
}

#[test]
fn resolves_photographer_export_headers() {
    let headers = [
        "Business Name",
        "Contact Name",
        "Address",
        "City",
        "State",
        "Zip",
        "Mobile Phone",
        "Email Address",
        "Website URL",
    ];
    let schema = resolve_roles(&headers);

    assert_eq!(schema.column(Role::Name), Some("Business Name"));
    assert_eq!(schema.column(Role::Phone), Some("Mobile Phone"));
    assert_eq!(schema.column(Role::Email), Some("Email Address"));
    assert_eq!(schema.column(Role::Website), Some("Website URL"));
    assert_eq!(schema.column(Role::ZipCode), Some("Zip"));
    assert_eq!(schema.resolved_count(), Role::ALL.len());
}

proptest! {
    #[test]
    fn resolution_is_deterministic(headers in prop::collection::vec("[A-Za-z #_-]{0,12}", 0..8)) {
        let first = resolve_roles(&headers);
        let second = resolve_roles(&headers);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn resolved_columns_come_from_the_header_set(headers in prop::collection::vec("[A-Za-z #_-]{0,12}", 0..8)) {
        let schema = resolve_roles(&headers);
        for (_, column) in schema.iter() {
            if let Some(column) = column {
                prop_assert!(headers.iter().any(|header| header == column));
            }
        }
        prop_assert_eq!(schema.is_resolved(Role::Name), !headers.is_empty());
    }
}
