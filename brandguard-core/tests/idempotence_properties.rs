// brandguard-core/tests/idempotence_properties.rs
use brandguard_core::{BrandGuard, ComplianceEngine};
use once_cell::sync::Lazy;
use proptest::prelude::*;

static GUARD: Lazy<BrandGuard> = Lazy::new(|| BrandGuard::with_defaults().unwrap());

fn email() -> impl Strategy<Value = String> {
    ("[a-z]{2,8}", "[a-z]{2,8}", prop::sample::select(vec!["com", "net", "org", "io"]))
        .prop_map(|(user, domain, tld)| format!("{user}@{domain}.{tld}"))
}

fn phone() -> impl Strategy<Value = String> {
    ("[2-9][0-9]{2}", "[0-9]{3}", "[0-9]{4}", 0..4usize).prop_map(|(a, b, c, style)| match style {
        0 => format!("{a}-{b}-{c}"),
        1 => format!("({a}) {b}-{c}"),
        2 => format!("+1 {a}.{b}.{c}"),
        _ => format!("1-{a}-{b}-{c}"),
    })
}

fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-z]{1,8}",
        2 => "[0-9]{1,4}",
        2 => email(),
        2 => phone(),
        1 => prop::sample::select(vec![
            "Casurance", "Cassurance", "cas urance", "Casurence", "ABC Insurance",
            "[Company Name]", "info@casurance.net", "1-888-254-0089", "(818) 889-5505",
            "ext. 12", "extension 7", "555-1234", "[Phone Number]", "lorem ipsum",
            "example@example.com", "(555) 555-5555",
        ])
        .prop_map(str::to_string),
    ]
}

fn content() -> impl Strategy<Value = String> {
    (prop::collection::vec(token(), 0..24), prop::sample::select(vec![" ", ", ", "\n"]))
        .prop_map(|(tokens, sep)| tokens.join(sep))
}

proptest! {
    #[test]
    fn sanitize_is_idempotent(text in content()) {
        let once = GUARD.sanitize(&text);
        let twice = GUARD.sanitize(&once);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn sanitized_output_never_contains_a_foreign_email(user in "[a-z]{3,8}", domain in "[a-z]{3,8}") {
        let foreign = format!("{user}@{domain}.com");
        let out = GUARD.sanitize(&format!("Write to {foreign} today."));
        prop_assert!(!out.contains(&foreign), "foreign email survived: {}", out);
    }

    #[test]
    fn sanitized_output_has_no_email_or_phone_errors(text in content()) {
        let out = GUARD.sanitize(&text);
        let result = GUARD.validate(&out);
        prop_assert!(
            !result.errors.iter().any(|e| e.starts_with("Invalid email") || e.starts_with("Invalid phone")),
            "{:?} -> {:?}", out, result.errors
        );
    }
}
