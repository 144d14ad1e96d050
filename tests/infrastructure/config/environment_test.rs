use history_store::infrastructure::config::Environment;

#[test]
fn given_known_names_when_parsing_then_environment_is_resolved() {
    assert_eq!("local".parse::<Environment>().ok(), Some(Environment::Local));
    assert_eq!("TEST".parse::<Environment>().ok(), Some(Environment::Test));
    assert_eq!(
        "production".parse::<Environment>().ok(),
        Some(Environment::Prod)
    );
}

#[test]
fn given_unknown_name_when_parsing_then_config_error_names_it() {
    let err = "staging".parse::<Environment>().unwrap_err();

    let message = err.to_string();
    assert!(message.contains("staging"));
    assert!(message.contains("local, test or prod"));
}

#[test]
fn given_environment_when_displayed_then_matches_settings_file_suffix() {
    assert_eq!(Environment::Prod.to_string(), "prod");
    assert_eq!(Environment::default(), Environment::Local);
}
