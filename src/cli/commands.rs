//! Command table for the interactive loop
//!
//! Each command token maps to the follow-up prompts it needs, read in the
//! listed order before the command runs.

use std::fmt;
use std::str::FromStr;

/// A command understood by the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    AddShelf,
    AddDocument,
    ShowShelf,
    MoveDocument,
    AllOwners,
    ShowOwner,
    ListDocuments,
    DeleteDocument,
    Help,
    Quit,
}

/// Table entry: token, follow-up prompts and help text
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub token: &'static str,
    pub command: Command,
    pub prompts: &'static [&'static str],
    pub summary: &'static str,
}

pub const DOCUMENT_NUMBER: &str = "document number";
pub const DOCUMENT_TYPE: &str = "document type";
pub const HOLDER_NAME: &str = "holder name";
pub const SHELF: &str = "shelf";

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        token: "as",
        command: Command::AddShelf,
        prompts: &[SHELF],
        summary: "add a shelf",
    },
    CommandSpec {
        token: "a",
        command: Command::AddDocument,
        prompts: &[DOCUMENT_NUMBER, DOCUMENT_TYPE, HOLDER_NAME, SHELF],
        summary: "add a document",
    },
    CommandSpec {
        token: "s",
        command: Command::ShowShelf,
        prompts: &[DOCUMENT_NUMBER],
        summary: "show the shelf a document is on",
    },
    CommandSpec {
        token: "m",
        command: Command::MoveDocument,
        prompts: &[DOCUMENT_NUMBER, SHELF],
        summary: "move a document to another shelf",
    },
    CommandSpec {
        token: "ap",
        command: Command::AllOwners,
        prompts: &[],
        summary: "show all holder names",
    },
    CommandSpec {
        token: "p",
        command: Command::ShowOwner,
        prompts: &[DOCUMENT_NUMBER],
        summary: "show the holder of a document",
    },
    CommandSpec {
        token: "l",
        command: Command::ListDocuments,
        prompts: &[],
        summary: "list all documents",
    },
    CommandSpec {
        token: "d",
        command: Command::DeleteDocument,
        prompts: &[DOCUMENT_NUMBER],
        summary: "delete a document",
    },
    CommandSpec {
        token: "h",
        command: Command::Help,
        prompts: &[],
        summary: "show this help",
    },
    CommandSpec {
        token: "q",
        command: Command::Quit,
        prompts: &[],
        summary: "quit",
    },
];

impl Command {
    /// Resolves a command token, ignoring surrounding whitespace
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim();
        COMMANDS
            .iter()
            .find(|spec| spec.token == token)
            .map(|spec| spec.command)
    }

    /// Returns the table entry for this command
    pub fn spec(self) -> &'static CommandSpec {
        // Table rows follow the enum declaration order
        &COMMANDS[self as usize]
    }

    pub fn token(self) -> &'static str {
        self.spec().token
    }

    /// Follow-up prompts, in reading order
    pub fn prompts(self) -> &'static [&'static str] {
        self.spec().prompts
    }

    /// Name used in JSON output
    pub fn name(self) -> &'static str {
        match self {
            Command::AddShelf => "add_shelf",
            Command::AddDocument => "add_document",
            Command::ShowShelf => "show_shelf",
            Command::MoveDocument => "move_document",
            Command::AllOwners => "all_owners",
            Command::ShowOwner => "show_owner",
            Command::ListDocuments => "list_documents",
            Command::DeleteDocument => "delete_document",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown command: '{0}'")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| UnknownCommand(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn resolves_tokens() {
        assert_eq!(Command::from_token("as"), Some(Command::AddShelf));
        assert_eq!(Command::from_token("a"), Some(Command::AddDocument));
        assert_eq!(Command::from_token("s"), Some(Command::ShowShelf));
        assert_eq!(Command::from_token("m"), Some(Command::MoveDocument));
        assert_eq!(Command::from_token("ap"), Some(Command::AllOwners));
        assert_eq!(Command::from_token("p"), Some(Command::ShowOwner));
        assert_eq!(Command::from_token("l"), Some(Command::ListDocuments));
        assert_eq!(Command::from_token("d"), Some(Command::DeleteDocument));
        assert_eq!(Command::from_token("q"), Some(Command::Quit));
    }

    #[test]
    fn token_whitespace_is_ignored() {
        assert_eq!(Command::from_token(" ap \n"), Some(Command::AllOwners));
    }

    #[test]
    fn unknown_tokens() {
        assert_eq!(Command::from_token("x"), None);
        assert_eq!(Command::from_token(""), None);
        assert_eq!(Command::from_token("AS"), None);
        assert_eq!("zz".parse::<Command>(), Err(UnknownCommand("zz".to_string())));
    }

    #[test]
    fn add_document_prompt_order() {
        assert_eq!(
            Command::AddDocument.prompts(),
            &[DOCUMENT_NUMBER, DOCUMENT_TYPE, HOLDER_NAME, SHELF]
        );
        assert_eq!(Command::MoveDocument.prompts(), &[DOCUMENT_NUMBER, SHELF]);
        assert!(Command::ListDocuments.prompts().is_empty());
    }

    #[test]
    fn table_is_consistent() {
        let tokens: HashSet<_> = COMMANDS.iter().map(|s| s.token).collect();
        assert_eq!(tokens.len(), COMMANDS.len());

        for (idx, spec) in COMMANDS.iter().enumerate() {
            assert_eq!(spec.command as usize, idx);
            assert_eq!(spec.command.token(), spec.token);
            assert_eq!(spec.token.parse::<Command>(), Ok(spec.command));
        }
    }
}
