//! Interactive session commands.

use anyhow::{Context, Result, bail};
use ghrepos_core::view::FilterField;

/// Help text listing the interactive commands.
pub const HELP: &str = "\
Commands:
  user <name> | <name>   search for a GitHub user
  field <field>          filter on name, size, created_at, stargazers_count or language
  filter [text]          set the filter text (empty clears it)
  page <n>               go to page n
  next | prev            step one page
  retry                  repeat a failed search
  show                   render the panel again
  state                  print the panel state as JSON
  help                   show this help
  quit | exit            leave
";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit a username.
    Search(String),
    /// Change the filter dimension.
    Field(FilterField),
    /// Change the filter text.
    Filter(String),
    /// Jump to a page.
    Page(usize),
    /// Next page.
    Next,
    /// Previous page.
    Prev,
    /// Retry a failed search.
    Retry,
    /// Re-render.
    Show,
    /// Dump state as JSON.
    State,
    /// Print help.
    Help,
    /// Leave the session.
    Quit,
}

impl Command {
    /// Parse a line. Blank lines yield `None`.
    ///
    /// A single word that is not a command is taken as a username.
    ///
    /// # Errors
    ///
    /// Returns an error for a malformed command.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        let command = match word.to_ascii_lowercase().as_str() {
            "user" | "search" => Self::Search(rest.to_string()),
            "field" => {
                if rest.is_empty() {
                    bail!("usage: field <name|size|created_at|stargazers_count|language>");
                }
                Self::Field(rest.parse()?)
            }
            "filter" => Self::Filter(rest.to_string()),
            "page" => {
                let page = rest
                    .parse()
                    .with_context(|| format!("usage: page <n> (got '{rest}')"))?;
                Self::Page(page)
            }
            "next" => Self::Next,
            "prev" => Self::Prev,
            "retry" => Self::Retry,
            "show" => Self::Show,
            "state" => Self::State,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ if rest.is_empty() => Self::Search(word.to_string()),
            _ => bail!("unknown command '{word}' (type `help`)"),
        };
        Ok(Some(command))
    }
}
