//! Terminal command parsing.

use thiserror::Error;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `+ <id>` / `add <id>`
    Add(String),
    /// `- <id>` / `remove <id>`
    Remove(String),
    Clear,
    Checkout,
    /// Redraw the product list and order summary.
    Show,
    /// Print the current snapshot as JSON.
    Json,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("'{0}' needs a product id")]
    MissingProductId(String),

    #[error("Unknown command '{0}', type 'help'")]
    Unknown(String),
}

impl Command {
    /// Parse a line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let arg = words.next().map(str::to_string);

        let needs_id = |arg: Option<String>| {
            arg.ok_or_else(|| CommandError::MissingProductId(verb.to_string()))
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "+" | "add" => Command::Add(needs_id(arg)?),
            "-" | "remove" | "rm" => Command::Remove(needs_id(arg)?),
            "clear" => Command::Clear,
            "checkout" | "order" => Command::Checkout,
            "show" | "ls" | "status" => Command::Show,
            "json" => Command::Json,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(CommandError::Unknown(verb.to_string())),
        };
        Ok(Some(command))
    }
}

pub const HELP: &str = "\
Commands:
  + <id>, add <id>       add one unit of a product
  - <id>, remove <id>    remove one unit of a product
  clear                  empty the cart
  checkout               place the order
  show                   redraw products and order summary
  json                   print the cart snapshot as JSON
  help                   this text
  quit                   leave the storefront";
