use super::SlashCommand;

#[test]
fn it_parse_empty_string() {
    let text = "";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_space_only() {
    let text = " ";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_single_slash() {
    let text = "/";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_invalid_prefix() {
    let text = "!q";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_plain_text() {
    let text = "how are you";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_valid_prefix() {
    let text = "/q";
    let cmd = SlashCommand::parse(text);
    assert!(cmd.is_some());
    assert_eq!(cmd.unwrap().command, "/q");
}
#[test]
fn it_parse_captures_args() {
    let cmd = SlashCommand::parse("/window 3").unwrap();
    assert_eq!(cmd.args, vec!["3".to_string()]);
}

#[test]
fn it_is_short_quit() {
    let cmd = SlashCommand::parse("/q").unwrap();
    assert!(cmd.is_quit());
}
#[test]
fn it_is_quit() {
    let cmd = SlashCommand::parse("/quit").unwrap();
    assert!(cmd.is_quit());
}
#[test]
fn it_is_exit() {
    let cmd = SlashCommand::parse("/exit").unwrap();
    assert!(cmd.is_quit());
}
#[test]
fn it_is_not_is_quit() {
    let cmd = SlashCommand::parse("/ml").unwrap();
    assert!(!cmd.is_quit());
}

#[test]
fn it_is_short_model_list() {
    let cmd = SlashCommand::parse("/ml").unwrap();
    assert!(cmd.is_model_list());
}
#[test]
fn it_is_model_list() {
    let cmd = SlashCommand::parse("/modellist").unwrap();
    assert!(cmd.is_model_list());
}
#[test]
fn it_is_model_list_typo() {
    let cmd = SlashCommand::parse("/modelist").unwrap();
    assert!(cmd.is_model_list());
}
#[test]
fn it_is_not_model_list() {
    let cmd = SlashCommand::parse("/m").unwrap();
    assert!(!cmd.is_model_list());
}

#[test]
fn it_is_short_model_set() {
    let cmd = SlashCommand::parse("/m").unwrap();
    assert!(cmd.is_model_set());
}
#[test]
fn it_is_model_set() {
    let cmd = SlashCommand::parse("/model").unwrap();
    assert!(cmd.is_model_set());
}
#[test]
fn it_is_not_is_model_set() {
    let cmd = SlashCommand::parse("/ml").unwrap();
    assert!(!cmd.is_model_set());
}

#[test]
fn it_is_short_window_set() {
    let cmd = SlashCommand::parse("/w 3").unwrap();
    assert!(cmd.is_window_set());
}
#[test]
fn it_is_window_set() {
    let cmd = SlashCommand::parse("/window 3").unwrap();
    assert!(cmd.is_window_set());
}
#[test]
fn it_is_not_window_set() {
    let cmd = SlashCommand::parse("/ml").unwrap();
    assert!(!cmd.is_window_set());
}

#[test]
fn it_is_short_help() {
    let cmd = SlashCommand::parse("/h").unwrap();
    assert!(cmd.is_help());
}
#[test]
fn it_is_help() {
    let cmd = SlashCommand::parse("/help").unwrap();
    assert!(cmd.is_help());
}
#[test]
fn it_is_not_help() {
    let cmd = SlashCommand::parse("/ml").unwrap();
    assert!(!cmd.is_help());
}
