use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use prompter::utils::{Condition, Converter, DEFAULT_MESSAGE, Menu, PromptError, Terminal};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[clap(
    name = "prompter",
    version,
    about = "Ask for a line of input until it is valid, then print it"
)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    #[clap(long, short, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask for a single typed value
    Ask {
        #[clap(long, short)]
        text: String,

        #[clap(long, short, default_value = "")]
        prompt: String,

        #[clap(long, short, value_enum, default_value_t = Kind::String)]
        kind: Kind,

        #[clap(long, help = "Only accept alphabetic answers (string kind)")]
        alpha: bool,

        #[clap(long, help = "Smallest accepted number (int and float kinds)")]
        min: Option<f64>,

        #[clap(long, help = "Largest accepted number (int and float kinds)")]
        max: Option<f64>,

        #[clap(long, help = "Message shown when the answer can't be converted")]
        cast_message: Option<String>,
    },
    /// Ask for one option out of a closed list
    Menu {
        #[clap(long, short, required_unless_present = "json")]
        text: Option<String>,

        #[clap(long, short)]
        prompt: Option<String>,

        #[clap(long, short)]
        message: Option<String>,

        #[clap(long = "option", short = 'o')]
        options: Vec<String>,

        #[clap(
            long,
            conflicts_with_all = ["text", "options", "prompt", "message"],
            help = "Whole menu as JSON: \
                    {\"text\": .., \"prompt\": .., \"message\": .., \"options\": [..]}"
        )]
        json: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    String,
    Int,
    Float,
    Bool,
}

fn main() {
    let cli = Cli::parse();

    let log_level_filter = LevelFilter::from_str(&cli.log_level).unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();

    match run(cli.command) {
        Ok(answer) => println!("{}", answer),
        Err(e) => {
            let code = match e.downcast_ref::<PromptError>() {
                Some(prompt_error) => prompt_error.exit_code(),
                None => 2,
            };
            if code != 0 {
                eprintln!("{:#}", e);
            }
            std::process::exit(code);
        }
    }
}

fn run(command: Commands) -> Result<String> {
    let mut terminal = Terminal::new();

    match command {
        Commands::Ask {
            text,
            prompt,
            kind,
            alpha,
            min,
            max,
            cast_message,
        } => {
            check_ask_flags(kind, alpha, min, max)?;
            let cast_message = cast_message.as_deref();
            let answer = match kind {
                Kind::String => {
                    let mut conditions = Vec::new();
                    if alpha {
                        conditions.push(
                            Condition::new(|s: &String| s.chars().all(char::is_alphabetic))
                                .message("only letters are allowed"),
                        );
                    }
                    terminal.ask(&text, &prompt, &conditions)?
                }
                Kind::Int => {
                    ask_number::<i32>(&mut terminal, &text, &prompt, min, max, cast_message)?
                }
                Kind::Float => {
                    ask_number::<f64>(&mut terminal, &text, &prompt, min, max, cast_message)?
                }
                Kind::Bool => terminal
                    .ask_for(&text, &prompt, &[], &Converter::<bool>::parse(), cast_message)?
                    .to_string(),
            };
            Ok(answer)
        }
        Commands::Menu {
            text,
            prompt,
            message,
            options,
            json,
        } => {
            let menu = match json {
                Some(json) => serde_json::from_str::<Menu>(&json).context("invalid menu JSON")?,
                None => Menu::new(text.unwrap_or_default(), options)
                    .prompt(prompt.unwrap_or_default())
                    .message(message.unwrap_or_else(|| DEFAULT_MESSAGE.to_string())),
            };
            log::debug!("asking menu with {} options", menu.options.len());
            Ok(terminal.get_option(&menu)?)
        }
    }
}

/// Rejects flags that have no effect for `kind`.
fn check_ask_flags(kind: Kind, alpha: bool, min: Option<f64>, max: Option<f64>) -> Result<()> {
    let numeric = matches!(kind, Kind::Int | Kind::Float);
    if alpha && kind != Kind::String {
        bail!("--alpha only applies to --kind string");
    }
    if (min.is_some() || max.is_some()) && !numeric {
        bail!("--min and --max only apply to --kind int or float");
    }
    Ok(())
}

fn ask_number<T>(
    terminal: &mut Terminal,
    text: &str,
    prompt: &str,
    min: Option<f64>,
    max: Option<f64>,
    cast_message: Option<&str>,
) -> Result<String>
where
    T: FromStr + Display + Into<f64> + Copy + 'static,
{
    let mut conditions = Vec::new();
    if let Some(min) = min {
        conditions.push(
            Condition::with_args(|n: &T, min: &f64| Into::<f64>::into(*n) >= *min, min)
                .message(format!("must be at least {}", min)),
        );
    }
    if let Some(max) = max {
        conditions.push(
            Condition::with_args(|n: &T, max: &f64| Into::<f64>::into(*n) <= *max, max)
                .message(format!("must be at most {}", max)),
        );
    }

    let converter = Converter::<T>::parse();
    let value = terminal.ask_for(text, prompt, &conditions, &converter, cast_message)?;
    Ok(value.to_string())
}
