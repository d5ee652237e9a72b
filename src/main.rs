#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(elided_lifetimes_in_paths)]

use std::{env, fs, path, process};

use ctint_core::BigInt;

mod config;
mod eval;
mod file_paths;

enum EvalResult {
    Ok,
    Err,
    NoInput,
}

/// Which action should be executed?
///
/// This implements [`FromIterator`] and can be `collect`ed from
/// the [`env::args()`]`.skip(1)` iterator.
#[derive(Debug, PartialEq, Eq, Clone)]
enum ArgsAction {
    /// Print the help message (without quitting explanation).
    Help,
    /// Print the current version.
    Version,
    /// Enter the REPL.
    Repl,
    /// Evaluate the arguments.
    Eval(String),
    /// Show the default config file
    DefaultConfig,
}

fn format_value(n: &BigInt, config: &config::Config) -> String {
    let mut res = if config.uppercase_hex {
        format!("{n:#X}")
    } else {
        format!("{n:#x}")
    };
    if config.show_bit_length {
        res.push_str(&format!(" ({} bits)", n.bit_length()));
    }
    res
}

fn eval_and_print_res(line: &str, config: &config::Config) -> EvalResult {
    match eval::evaluate(line) {
        Ok(Some(eval::Answer::Value(n))) => {
            println!("{}", format_value(&n, config));
            EvalResult::Ok
        }
        Ok(Some(eval::Answer::Truth(b))) => {
            println!("{b}");
            EvalResult::Ok
        }
        Ok(None) => EvalResult::NoInput,
        Err(msg) => {
            eprintln!("Error: {msg}");
            EvalResult::Err
        }
    }
}

fn print_help(explain_quitting: bool) {
    println!("Evaluates integer expressions with +, -, *, <<, >> and comparisons.");
    println!("Literals may be decimal (123) or hexadecimal (0x7b).");
    println!();
    println!("Version: {}", ctint_core::get_version());
    println!(
        "Constant-time selection: {}",
        if ctint_core::config::CONSTANT_TIME {
            "enabled"
        } else {
            "disabled"
        }
    );
    if let Some(config_path) = file_paths::get_config_file_location() {
        println!("Config file: {}", config_path.to_string_lossy());
    } else {
        println!("Failed to get config file location");
    }
    if let Some(history_path) = file_paths::get_history_file_location() {
        println!("History file: {}", history_path.to_string_lossy());
    } else {
        println!("Failed to get history file location");
    }
    if explain_quitting {
        println!("\nTo quit, type `quit`.");
    }
}

fn save_history(rl: &mut rustyline::DefaultEditor, path: Option<&path::Path>) {
    let Some(history_path) = path else {
        return;
    };
    if let Some(dir) = history_path.parent() {
        if fs::create_dir_all(dir).is_err() {
            return;
        }
    }
    if let Err(e) = rl.save_history(history_path) {
        tracing::debug!("unable to save history: {e}");
    }
}

fn repl_loop(config: &config::Config) -> i32 {
    let mut rl = match rustyline::DefaultEditor::with_config(
        rustyline::Config::builder()
            .history_ignore_space(true)
            .auto_add_history(true)
            .build(),
    ) {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("Error: {err}");
            return 1;
        }
    };
    let history_path = file_paths::get_history_file_location();
    if let Some(history_path) = &history_path {
        if rl.load_history(history_path.as_path()).is_err() {
            // No previous history
        }
    }
    let mut initial_run = true; // set to false after first successful command
    let mut last_command_success = true;
    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => match line.trim() {
                "exit" | "quit" | ":q" => break,
                "help" | "?" => {
                    print_help(true);
                }
                line => match eval_and_print_res(line, config) {
                    EvalResult::Ok => {
                        last_command_success = true;
                        initial_run = false;
                    }
                    EvalResult::NoInput => {
                        last_command_success = true;
                    }
                    EvalResult::Err => {
                        last_command_success = false;
                    }
                },
            },
            Err(rustyline::error::ReadlineError::Interrupted) => {
                if initial_run {
                    break;
                }
                println!("Use Ctrl-D (i.e. EOF) to exit");
            }
            Err(rustyline::error::ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {err}");
                break;
            }
        }
    }
    save_history(&mut rl, history_path.as_deref());
    if last_command_success {
        0
    } else {
        1
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("CTINT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    process::exit(real_main())
}

fn real_main() -> i32 {
    init_logging();
    // Assemble the action from all but the first argument.
    let action: ArgsAction = env::args().skip(1).collect();
    match action {
        ArgsAction::Help => {
            print_help(false);
            0
        }
        ArgsAction::Version => {
            println!("{}", ctint_core::get_version());
            0
        }
        ArgsAction::DefaultConfig => {
            println!("{}", config::DEFAULT_CONFIG_FILE);
            0
        }
        ArgsAction::Eval(expr) => {
            let config = config::read();
            match eval_and_print_res(expr.as_str(), &config) {
                EvalResult::Ok | EvalResult::NoInput => 0,
                EvalResult::Err => 1,
            }
        }
        ArgsAction::Repl => {
            let config = config::read();
            repl_loop(&config)
        }
    }
}

impl FromIterator<String> for ArgsAction {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        iter.into_iter().fold(ArgsAction::Repl, |action, arg| {
            use ArgsAction::{DefaultConfig, Eval, Help, Repl, Version};
            match (action, arg.as_str()) {
                // help beats everything
                (_, "help" | "--help" | "-h") | (Help, _) => Help,
                // then version, which only help can override
                (Repl | Eval(_) | DefaultConfig, "--version" | "-v" | "-V") | (Version, _) => {
                    Version
                }
                (Repl | Eval(_), "--default-config") | (DefaultConfig, _) => DefaultConfig,
                // blank arguments alone still enter the repl
                (Repl, arg) if !arg.trim().is_empty() => Eval(String::from(arg)),
                (Repl, _) => Repl,
                (Eval(eval), arg) => Eval(eval + " " + arg),
            }
        })
    }
}
