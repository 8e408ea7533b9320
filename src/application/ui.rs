use std::io::Write;
use std::time::Duration;
use std::time::Instant;

use anyhow::Result;
use strum::IntoEnumIterator;
use tokio::io::stdin;
use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Author;
use crate::domain::models::ChatOptions;
use crate::domain::models::History;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::ModelName;
use crate::domain::models::ProviderBox;
use crate::domain::models::SlashCommand;
use crate::domain::models::TokenUsage;
use crate::domain::services::Orchestrator;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /modellist (/ml) - Lists the supported Groq models.
- /model (/m) [MODEL_NAME,MODEL_INDEX] - Switches the active model. Accepts either a name or an index from /modellist.
- /window (/w) [SIZE] - Sets how many of the most recent exchanges are sent back to the model, from 1 to 10.
- /quit /exit (/q) - Exit Natter.
- /help (/h) - Provides this help menu.

HOTKEYS:
- CTRL+D - Exit Natter.
        "#;

    return text.trim().to_string();
}

fn render_message(message: &Message) {
    let label = format!("{}:", message.author.to_string());
    match message.message_type() {
        MessageType::Normal => {
            println!("{} {}", Paint::cyan(label).bold(), message.text);
        }
        MessageType::Error => {
            println!("{} {}", Paint::red(label).bold(), message.text);
        }
    }
}

fn render_error(text: &str) {
    render_message(&Message::new_with_type(
        Author::Natter,
        MessageType::Error,
        text,
    ));
}

fn render_turn_footer(elapsed: Duration, usage: Option<TokenUsage>) {
    let mut footer = format!("Response time: {:.2} seconds", elapsed.as_secs_f64());
    if let Some(usage) = usage {
        footer = format!("{footer} ({} tokens)", usage.total_tokens);
    }
    println!("{}", Paint::new(footer).dimmed());
}

fn render_input_prompt() -> Result<()> {
    print!(
        "{} ",
        Paint::green(format!("{}:", Author::User.to_string())).bold()
    );
    std::io::stdout().flush()?;
    return Ok(());
}

fn model_list() {
    let active = Config::get(ConfigKey::Model);
    let lines = ModelName::iter()
        .enumerate()
        .map(|(idx, model)| {
            let entry = format!("- ({}) {model}", idx + 1);
            if model.to_string() == active {
                return format!("{entry} (active)");
            }
            return entry;
        })
        .collect::<Vec<String>>();

    render_message(&Message::new(Author::Natter, &lines.join("\n")));
}

fn model_set(command: &SlashCommand) {
    if command.args.is_empty() {
        render_error("You must specify a model name with `/model`. Run `/help` for more details.");
        return;
    }

    let mut model_name = command.args[0].to_string();
    if let Ok(idx) = model_name.parse::<usize>() {
        let models = ModelName::iter().collect::<Vec<ModelName>>();
        if idx == 0 || idx > models.len() {
            render_error(&format!("{idx} is not a valid index from the model list."));
            return;
        }
        model_name = models[idx - 1].to_string();
    }

    if ModelName::parse(model_name.clone()).is_none() {
        render_error(&format!(
            "No model named {model_name} is supported. Run `/modellist` to see the options."
        ));
        return;
    }

    Config::set(ConfigKey::Model, &model_name);
    render_message(&Message::new(
        Author::Natter,
        &format!("{model_name} has entered the chat."),
    ));
}

fn window_set(command: &SlashCommand) {
    if command.args.is_empty() {
        render_error("You must specify a size with `/window`. Run `/help` for more details.");
        return;
    }

    let arg = command.args[0].to_string();
    match arg.parse::<usize>() {
        Ok(size) if (1..=10).contains(&size) => {
            Config::set(ConfigKey::WindowSize, &size.to_string());
            render_message(&Message::new(
                Author::Natter,
                &format!("Context window set to {size} exchanges."),
            ));
        }
        _ => {
            render_error(&format!(
                "{arg} is not a valid window size. Pick a number between 1 and 10."
            ));
        }
    }
}

pub async fn start(provider: ProviderBox) -> Result<()> {
    let mut history = History::default();
    let mut lines = BufReader::new(stdin()).lines();

    render_message(&Message::new(
        Author::Natter,
        &format!(
            "You're chatting with {} through Groq. Type /help for commands, /quit to leave.",
            Config::get(ConfigKey::Model)
        ),
    ));

    loop {
        render_input_prompt()?;

        let line = lines.next_line().await?;
        if line.is_none() {
            println!();
            break;
        }

        let text = line.unwrap();
        if let Some(command) = SlashCommand::parse(&text) {
            if command.is_quit() {
                break;
            }
            if command.is_help() {
                render_message(&Message::new(Author::Natter, &help_text()));
                continue;
            }
            if command.is_model_list() {
                model_list();
                continue;
            }
            if command.is_model_set() {
                model_set(&command);
                continue;
            }
            if command.is_window_set() {
                window_set(&command);
                continue;
            }
        }

        let options = match ChatOptions::from_config() {
            Ok(options) => options,
            Err(err) => {
                render_error(&err.to_string());
                continue;
            }
        };

        let started = Instant::now();
        match Orchestrator::submit(&provider, &text, &options, &history).await {
            Ok(turn) => {
                render_message(&Message::new(Author::Model, &turn.exchange.ai));
                render_turn_footer(started.elapsed(), turn.usage);
                history.record(turn.exchange);
            }
            Err(err) => {
                render_error(&err.to_string());
            }
        }
    }

    return Ok(());
}
