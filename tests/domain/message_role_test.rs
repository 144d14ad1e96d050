use history_store::domain::{MessageRole, UnknownRole};

#[test]
fn given_canonical_tags_when_parsing_then_each_role_is_recognised() {
    assert_eq!("system".parse::<MessageRole>(), Ok(MessageRole::System));
    assert_eq!("human".parse::<MessageRole>(), Ok(MessageRole::Human));
    assert_eq!("ai".parse::<MessageRole>(), Ok(MessageRole::Ai));
}

#[test]
fn given_mixed_case_tags_when_parsing_then_case_is_ignored() {
    assert_eq!("Human".parse::<MessageRole>(), Ok(MessageRole::Human));
    assert_eq!("AI".parse::<MessageRole>(), Ok(MessageRole::Ai));
    assert_eq!("SYSTEM".parse::<MessageRole>(), Ok(MessageRole::System));
}

#[test]
fn given_unrecognised_tag_when_parsing_then_error_names_the_tag() {
    let err = "bogus-role".parse::<MessageRole>().unwrap_err();

    assert_eq!(err, UnknownRole("bogus-role".to_string()));
    assert_eq!(err.to_string(), "unknown role: bogus-role");
}

#[test]
fn given_role_when_displayed_then_round_trips_through_parse() {
    for role in [MessageRole::System, MessageRole::Human, MessageRole::Ai] {
        assert_eq!(role.to_string().parse::<MessageRole>(), Ok(role));
    }
}
