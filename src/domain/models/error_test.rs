use super::ChatError;

#[test]
fn it_formats_each_variant() {
    let configuration = ChatError::configuration("GROQ_API_KEY is not set");
    insta::assert_snapshot!(configuration.to_string(), @"configuration error: GROQ_API_KEY is not set");

    let provider = ChatError::provider_request("Groq returned no choices");
    insta::assert_snapshot!(provider.to_string(), @"provider request failed: Groq returned no choices");

    let validation = ChatError::validation("your message is empty");
    insta::assert_snapshot!(validation.to_string(), @"validation error: your message is empty");
}

#[test]
fn it_identifies_variants() {
    assert!(ChatError::configuration("bad").is_configuration());
    assert!(!ChatError::configuration("bad").is_provider_request());
    assert!(ChatError::provider_request("bad").is_provider_request());
    assert!(ChatError::validation("bad").is_validation());
    assert!(!ChatError::validation("bad").is_configuration());
}
