use super::*;

#[test]
fn string_forms_match_stored_values() {
    assert_eq!(ThemePreference::Light.as_str(), "light");
    assert_eq!(ThemePreference::Dark.as_str(), "dark");
    assert_eq!(ThemePreference::Dark.to_string(), "dark");
}

#[test]
fn parse_accepts_both_variants() {
    assert_eq!("light".parse::<ThemePreference>().unwrap(), ThemePreference::Light);
    assert_eq!("dark".parse::<ThemePreference>().unwrap(), ThemePreference::Dark);
}

#[test]
fn parse_is_case_sensitive() {
    let err = "Dark".parse::<ThemePreference>().unwrap_err();
    assert!(matches!(err, ThemeError::UnrecognizedValue(ref v) if v == "Dark"));
}

#[test]
fn parse_rejects_legacy_boolean_strings() {
    assert!("true".parse::<ThemePreference>().is_err());
    assert!("".parse::<ThemePreference>().is_err());
}

#[test]
fn from_prefers_dark_maps_both_ways() {
    assert_eq!(ThemePreference::from_prefers_dark(true), ThemePreference::Dark);
    assert_eq!(ThemePreference::from_prefers_dark(false), ThemePreference::Light);
}

#[test]
fn toggled_flips_variant() {
    assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
    assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
    assert!(ThemePreference::Light.toggled().is_dark());
}

#[test]
fn serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&ThemePreference::Light).unwrap(), "\"light\"");
    let parsed: ThemePreference = serde_json::from_str("\"dark\"").unwrap();
    assert_eq!(parsed, ThemePreference::Dark);
}

#[test]
fn error_message_quotes_value() {
    let err = ThemeError::UnrecognizedValue("blue".into());
    assert_eq!(err.to_string(), "unrecognized theme value: \"blue\"");
}
