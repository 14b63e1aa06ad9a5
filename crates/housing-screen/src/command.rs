//! Textual command vocabulary for the interactive shell.
//!
//! # Supported commands
//!
//! | Command | Action |
//! |---------|--------|
//! | `q`, `quit` | Leave the shell |
//! | `help`, `?` | Print the command list |
//! | `ls`, `show` | Redisplay the current view |
//! | `menu <n>` | Pick menu entry `n` (1-based) |
//! | `open <name>` | Show a residence |
//! | `search <text>`, `/<text>` | Filter properties (no text clears) |
//! | `select` | Go to the comparison selection view |
//! | `toggle <name>` | Pick / unpick a residence for comparison |
//! | `compare` | Compare the picked residences |
//! | `resource <n>` | Open resource `n` (1-based) |
//! | `back`, `b` | Previous view |

use crate::state::Action;

/// A parsed, validated shell command.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenCommand {
    Quit,
    Help,
    Show,
    Dispatch(Action),
}

pub const HELP: &str = "\
commands:
  menu <n>          pick a menu entry
  open <name>       show a residence
  search <text>     filter properties (also /<text>; no text clears)
  select            choose residences to compare
  toggle <name>     pick / unpick a residence
  compare           compare the picked residences
  resource <n>      open a housing resource
  back, b           previous view
  ls, show          redisplay the current view
  help, ?           this list
  q, quit           leave";

impl ScreenCommand {
    /// Parse one input line.
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// line returns `Err("")` as a sentinel meaning "do nothing".
    pub fn parse(input: &str) -> Result<ScreenCommand, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        if let Some(rest) = input.strip_prefix('/') {
            return Ok(ScreenCommand::Dispatch(Action::SetQuery(rest.trim().to_string())));
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" => Ok(ScreenCommand::Quit),
            "help" | "?" => Ok(ScreenCommand::Help),
            "ls" | "show" => Ok(ScreenCommand::Show),
            "back" | "b" => Ok(ScreenCommand::Dispatch(Action::Back)),
            "select" => Ok(ScreenCommand::Dispatch(Action::BeginComparison)),
            "compare" => Ok(ScreenCommand::Dispatch(Action::SubmitComparison)),
            "search" => Ok(ScreenCommand::Dispatch(Action::SetQuery(rest.to_string()))),
            "menu" => position(rest, "menu").map(|i| ScreenCommand::Dispatch(Action::SelectSection(i))),
            "resource" => {
                position(rest, "resource").map(|i| ScreenCommand::Dispatch(Action::OpenResource(i)))
            }
            "open" => named(rest, "open").map(|n| ScreenCommand::Dispatch(Action::OpenResidence(n))),
            "toggle" => {
                named(rest, "toggle").map(|n| ScreenCommand::Dispatch(Action::ToggleSelection(n)))
            }
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Parse a 1-based position into a 0-based index.
fn position(rest: &str, command: &str) -> Result<usize, String> {
    match rest.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("usage: {command} <n>  (n starts at 1)")),
    }
}

fn named(rest: &str, command: &str) -> Result<String, String> {
    if rest.is_empty() {
        Err(format!("usage: {command} <residence name>"))
    } else {
        Ok(rest.to_string())
    }
}
