//! Line-oriented stdin prompts for the interactive commands.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio_util::sync::CancellationToken;
use wallet_settings::FormField;

use crate::error::CliError;

/// Reads one line per prompt; yields `None` on EOF or cancellation.
pub struct LineReader {
    lines: Lines<BufReader<Stdin>>,
    cancel: CancellationToken,
}

impl LineReader {
    pub fn stdin(cancel: CancellationToken) -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            cancel,
        }
    }

    pub async fn prompt(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        let mut stdout = std::io::stdout();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;

        tokio::select! {
            line = self.lines.next_line() => Ok(line?),
            _ = self.cancel.cancelled() => {
                println!();
                Ok(None)
            }
        }
    }
}

/// One command of the interactive form editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    Set(FormField, String),
    Restore,
    Show,
    Save,
    Quit,
    Help,
    Empty,
}

pub const EDIT_HELP: &str = "\
commands:
  <field> <value>   set a field (node-url, indexing-url, chain-id, network-fee, gas-limit)
  restore           restore node url, indexing url and chain id
  show              show the form
  save              save changes
  quit              leave without saving";

pub fn parse_edit_command(line: &str) -> Result<EditCommand, String> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((h, r)) => (h, r.trim()),
        None => (line, ""),
    };
    match head {
        "" => Ok(EditCommand::Empty),
        "restore" => Ok(EditCommand::Restore),
        "show" => Ok(EditCommand::Show),
        "save" => Ok(EditCommand::Save),
        "quit" | "exit" => Ok(EditCommand::Quit),
        "help" | "?" => Ok(EditCommand::Help),
        field => {
            let field: FormField = field.parse()?;
            Ok(EditCommand::Set(field, rest.to_string()))
        }
    }
}

/// Affirmative answer to a yes/no prompt.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
