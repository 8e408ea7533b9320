use strum::VariantNames;

use super::ChatOptions;
use super::ModelName;

#[test]
fn it_parses_known_models() {
    assert_eq!(
        ModelName::parse("mixtral-8x7b-32768".to_string()),
        Some(ModelName::Mixtral8x7b)
    );
    assert_eq!(
        ModelName::parse("llama3-8b-8192".to_string()),
        Some(ModelName::Llama3_8b)
    );
    assert_eq!(ModelName::parse("gpt-4".to_string()), None);
}

#[test]
fn it_lists_model_variants() {
    assert_eq!(ModelName::VARIANTS, ["mixtral-8x7b-32768", "llama3-8b-8192"]);
}

#[test]
fn it_parses_valid_options() {
    let options = ChatOptions::parse("llama3-8b-8192".to_string(), "5".to_string()).unwrap();

    assert_eq!(options.model, ModelName::Llama3_8b);
    assert_eq!(options.window_size, 5);
}

#[test]
fn it_rejects_unknown_models() {
    let res = ChatOptions::parse("gpt-4".to_string(), "5".to_string());

    assert!(res.is_err());
    assert!(res.unwrap_err().is_configuration());
}

#[test]
fn it_rejects_window_sizes_out_of_range() {
    assert!(ChatOptions::parse("llama3-8b-8192".to_string(), "0".to_string()).is_err());
    assert!(ChatOptions::parse("llama3-8b-8192".to_string(), "11".to_string()).is_err());
    assert!(ChatOptions::parse("llama3-8b-8192".to_string(), "five".to_string()).is_err());
}

#[test]
fn it_accepts_window_size_bounds() {
    assert_eq!(
        ChatOptions::parse("llama3-8b-8192".to_string(), "1".to_string())
            .unwrap()
            .window_size,
        1
    );
    assert_eq!(
        ChatOptions::parse("llama3-8b-8192".to_string(), "10".to_string())
            .unwrap()
            .window_size,
        10
    );
}
