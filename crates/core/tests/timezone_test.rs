use chrono_tz::Tz;
use pretty_assertions::assert_eq;
use rstest::rstest;
use studiobook_core::queries::resolve_timezone;

#[test]
fn test_absent_timezone_uses_default() {
    assert_eq!(resolve_timezone(None, Tz::UTC), Tz::UTC);
    assert_eq!(
        resolve_timezone(None, chrono_tz::Europe::Berlin),
        chrono_tz::Europe::Berlin
    );
}

#[test]
fn test_valid_timezone_is_used() {
    assert_eq!(
        resolve_timezone(Some("Asia/Kolkata"), Tz::UTC),
        chrono_tz::Asia::Kolkata
    );
}

#[rstest]
#[case("Not/AZone")]
#[case("kolkata")]
#[case("")]
fn test_unrecognized_timezone_falls_back(#[case] name: &str) {
    // Fallback rather than rejection keeps the read path total
    assert_eq!(resolve_timezone(Some(name), Tz::UTC), Tz::UTC);
}
