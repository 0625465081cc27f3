use std::{
    env, fmt,
    io::{self, IsTerminal, Write},
};

use colored::Colorize;
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use super::CliError;

/// When set, prompts read plain lines from stdin instead of rendering
/// interactive widgets. Also triggered automatically for piped input.
pub const SCRIPT_ENV: &str = "LEDGER_CLI_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub fn detect_mode() -> CliMode {
    if env::var_os(SCRIPT_ENV).is_some() || !io::stdin().is_terminal() {
        CliMode::Script
    } else {
        CliMode::Interactive
    }
}

pub fn clear_screen(mode: CliMode) -> Result<(), CliError> {
    if mode == CliMode::Interactive {
        execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    }
    Ok(())
}

/// Presents a menu and returns the selected index. `None` means the session
/// ended (Esc interactively, EOF in script mode); script input accepts a
/// 1-based number or `q` for the last option.
pub fn choose(mode: CliMode, title: &str, options: &[&str]) -> Result<Option<usize>, CliError> {
    match mode {
        CliMode::Interactive => {
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(title)
                .items(options)
                .default(0)
                .interact_opt()?;
            Ok(selection)
        }
        CliMode::Script => {
            println!("\n{}", title.bold());
            for (idx, option) in options.iter().enumerate() {
                println!("{}. {}", idx + 1, option);
            }
            loop {
                let Some(line) = read_line("> ")? else {
                    return Ok(None);
                };
                let token = line.trim();
                if token.eq_ignore_ascii_case("q") {
                    return Ok(Some(options.len() - 1));
                }
                match token.parse::<usize>() {
                    Ok(n) if (1..=options.len()).contains(&n) => return Ok(Some(n - 1)),
                    _ => warning(format!("Unknown choice `{token}`")),
                }
            }
        }
    }
}

/// Free-form text prompt; empty input is allowed. `None` on EOF.
pub fn input_text(mode: CliMode, prompt: &str) -> Result<Option<String>, CliError> {
    match mode {
        CliMode::Interactive => {
            let value = Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?;
            Ok(Some(value))
        }
        CliMode::Script => read_line(&format!("{prompt}: ")),
    }
}

pub fn confirm(mode: CliMode, prompt: &str) -> Result<Option<bool>, CliError> {
    match mode {
        CliMode::Interactive => {
            let answer = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt)
                .default(false)
                .interact()?;
            Ok(Some(answer))
        }
        CliMode::Script => {
            let Some(line) = read_line(&format!("{prompt} (y/n): "))? else {
                return Ok(None);
            };
            Ok(Some(matches!(
                line.trim().to_ascii_lowercase().as_str(),
                "y" | "yes"
            )))
        }
    }
}

/// Waits for Enter so the user can read the screen. Skipped in script mode.
pub fn pause(mode: CliMode) -> Result<(), CliError> {
    if mode == CliMode::Interactive {
        let _ = read_line("Press Enter to continue ")?;
    }
    Ok(())
}

fn read_line(prompt: &str) -> Result<Option<String>, CliError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

pub fn info(message: impl fmt::Display) {
    println!("{message}");
}

pub fn success(message: impl fmt::Display) {
    println!("{}", message.to_string().bright_green());
}

pub fn warning(message: impl fmt::Display) {
    println!("{}", message.to_string().bright_yellow());
}

pub fn error(message: impl fmt::Display) {
    println!("{}", message.to_string().bright_red());
}
