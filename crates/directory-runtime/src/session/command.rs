//! Line-oriented commands.

use std::str::FromStr;

use shared_types::{ContactId, ContactPatch, ValidationError};
use thiserror::Error;
use url::form_urlencoded;

pub const HELP: &str = "\
ls                          show all contacts
search <text>               filter the list as you type
back | forward              move through history
open <id>                   show a contact
new                         create a blank contact and edit it
edit <id> field=value ...   update fields (form-encoded: '+' is a space)
fav <id> on|off             toggle favorite in place
rm <id>                     delete a contact
help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    /// Raw text; may be empty.
    Search(String),
    Back,
    Forward,
    Open(ContactId),
    New,
    Edit { id: ContactId, patch: ContactPatch },
    Favorite { id: ContactId, favorite: bool },
    Remove(ContactId),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Expected on or off, got {0:?}")]
    InvalidToggle(String),

    #[error(transparent)]
    Field(#[from] ValidationError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

        match verb {
            "" => Err(CommandError::Empty),
            "ls" => Ok(Self::List),
            "search" => Ok(Self::Search(rest.to_string())),
            "back" => Ok(Self::Back),
            "forward" => Ok(Self::Forward),
            "open" => Ok(Self::Open(contact_id(rest)?)),
            "new" => Ok(Self::New),
            "edit" => {
                let (id, fields) = rest
                    .split_once(char::is_whitespace)
                    .unwrap_or((rest, ""));
                let id = contact_id(id)?;
                let encoded = fields.split_whitespace().collect::<Vec<_>>().join("&");
                let pairs: Vec<(String, String)> = form_urlencoded::parse(encoded.as_bytes())
                    .into_owned()
                    .collect();
                let patch = ContactPatch::from_form(
                    pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
                )?;
                Ok(Self::Edit { id, patch })
            }
            "fav" => {
                let mut args = rest.split_whitespace();
                let id = contact_id(args.next().unwrap_or_default())?;
                let favorite = match args.next() {
                    Some("on") => true,
                    Some("off") => false,
                    Some(other) => return Err(CommandError::InvalidToggle(other.to_string())),
                    None => return Err(CommandError::MissingArgument("on|off")),
                };
                Ok(Self::Favorite { id, favorite })
            }
            "rm" => Ok(Self::Remove(contact_id(rest)?)),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn contact_id(raw: &str) -> Result<ContactId, CommandError> {
    ContactId::parse(Some(raw)).map_err(|_| CommandError::MissingArgument("contact id"))
}
