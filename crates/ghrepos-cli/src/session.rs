//! One-shot and interactive front ends over a [`PanelDriver`].

use std::io::{IsTerminal, Write};

use anyhow::{Context, Result, bail};
use ghrepos_core::panel::Action;
use ghrepos_core::render::render;
use ghrepos_core::view::FilterField;
use ghrepos_core::{AppConfig, PanelDriver, Phase, SearchForm};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::args::Args;
use crate::command::{Command, HELP};

/// Fetch `username` once, apply the view options from `args` and print.
///
/// # Errors
///
/// Returns an error if an option is invalid or the search fails.
pub async fn run_once(config: &AppConfig, username: &str, args: &Args) -> Result<()> {
    // Reject a bad field before touching the network.
    let field = args
        .field
        .as_deref()
        .map(str::parse::<FilterField>)
        .transpose()
        .context("invalid --field")?;

    let mut driver = PanelDriver::from_config(config).context("failed to create GitHub client")?;
    let mut form = SearchForm::new();
    form.set_username(username);
    driver.dispatch(form.submit().into());
    driver.settle().await;

    if let Phase::Error { message } = driver.state().phase() {
        bail!("failed to load {}: {message}", driver.state().username());
    }

    if let Some(field) = field {
        driver.dispatch(Action::SetFilterField(field));
    }
    if let Some(text) = &args.filter {
        driver.dispatch(Action::SetFilterText(text.clone()));
    }
    driver.dispatch(Action::SetPage(args.page));

    if args.json {
        println!("{}", driver.state().to_json()?);
    } else {
        print!("{}", render(driver.state()));
    }
    Ok(())
}

/// Read commands from stdin until `quit` or end of input.
///
/// Fetch results are rendered as they arrive. At end of input a pending
/// search is awaited and rendered before returning.
///
/// # Errors
///
/// Returns an error if stdin or stdout fail.
pub async fn run_interactive(config: &AppConfig) -> Result<()> {
    let mut driver = PanelDriver::from_config(config).context("failed to create GitHub client")?;
    let mut form = SearchForm::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let prompt = std::io::stdin().is_terminal();
    debug!(mode = %driver.mode(), prompt, "interactive session started");

    print!("{}", render(driver.state()));
    println!("Type `help` for commands.");
    show_prompt(prompt)?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    if driver.state().phase().is_pending() {
                        driver.settle().await;
                        print!("{}", render(driver.state()));
                    }
                    break;
                };
                match Command::parse(&line) {
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(command)) => execute(&mut driver, &mut form, command)?,
                    Ok(None) => {}
                    Err(e) => eprintln!("error: {e:#}"),
                }
                show_prompt(prompt)?;
            }
            Some(action) = driver.next_result() => {
                let before = driver.state().phase().clone();
                driver.dispatch(action);
                if *driver.state().phase() != before {
                    print!("{}", render(driver.state()));
                    show_prompt(prompt)?;
                }
            }
        }
    }

    debug!("interactive session finished");
    Ok(())
}

fn execute(driver: &mut PanelDriver, form: &mut SearchForm, command: Command) -> Result<()> {
    let action: Action = match command {
        Command::Search(username) => {
            form.set_username(username);
            form.submit().into()
        }
        Command::Field(field) => Action::SetFilterField(field),
        Command::Filter(text) => Action::SetFilterText(text),
        Command::Page(page) => Action::SetPage(page),
        Command::Next => Action::NextPage,
        Command::Prev => Action::PrevPage,
        Command::Retry => Action::Retry,
        Command::Show => {
            print!("{}", render(driver.state()));
            return Ok(());
        }
        Command::State => {
            println!("{}", driver.state().to_json()?);
            return Ok(());
        }
        Command::Help | Command::Quit => {
            print!("{HELP}");
            return Ok(());
        }
    };

    driver.dispatch(action);
    print!("{}", render(driver.state()));
    Ok(())
}

fn show_prompt(enabled: bool) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    if enabled {
        write!(stdout, "> ")?;
    }
    stdout.flush().context("failed to flush stdout")
}
