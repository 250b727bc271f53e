//! Interactive command loop
//!
//! Reads a command token per line, then the follow-up arguments the
//! command table declares for it, runs the registry operation and renders
//! the result. Registry errors are rendered and the loop carries on; only
//! I/O failures on the input or output end it early.

use std::io::{self, BufRead, Write};

use serde_json::json;
use thiserror::Error;

use super::commands::{Command, COMMANDS};
use super::output::Output;
use crate::config::DEFAULT_PROMPT;
use crate::domain::{Registry, RegistryError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// One run of the command loop over a registry
pub struct Session<'a, R, W: Write> {
    registry: &'a mut Registry,
    input: R,
    output: Output<W>,
    prompt: String,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(registry: &'a mut Registry, input: R, output: Output<W>) -> Self {
        Self {
            registry,
            input,
            output,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    /// Sets the command prompt text
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Runs until the quit command or end of input
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.output.prompt(&self.prompt)?;

            let Some(line) = self.read_line()? else {
                self.output.verbose("End of input");
                break;
            };

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    if !line.is_empty() {
                        self.output.verbose_ctx("session", &format!("{}, ignored", e));
                    }
                    continue;
                }
            };

            if command == Command::Quit {
                self.output.verbose("Quit");
                break;
            }

            let Some(args) = self.read_args(command)? else {
                self.output.verbose_ctx(
                    "session",
                    &format!("End of input while reading arguments for '{}'", command),
                );
                break;
            };

            self.output.verbose_ctx("dispatch", &format!("{} {:?}", command.name(), args));

            match self.execute(command, &args) {
                Ok(()) => {}
                Err(SessionError::Io(e)) => return Err(e),
                Err(e) => self.output.error(&e.to_string())?,
            }
        }

        self.output.flush()
    }

    /// Returns the output sink
    pub fn into_output(self) -> W {
        self.output.into_inner()
    }

    /// Reads one trimmed line, or `None` at end of input
    ///
    /// Invalid UTF-8 is replaced rather than rejected, so a garbled line
    /// is just an unknown token or an odd argument.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    /// Reads the declared arguments of `command`, in table order
    fn read_args(&mut self, command: Command) -> io::Result<Option<Vec<String>>> {
        let prompts = command.prompts();
        let mut args = Vec::with_capacity(prompts.len());

        for name in prompts {
            self.output.prompt(&format!("Enter {}: ", name))?;
            match self.read_line()? {
                Some(value) => args.push(value),
                None => return Ok(None),
            }
        }

        Ok(Some(args))
    }

    fn execute(&mut self, command: Command, args: &[String]) -> Result<(), SessionError> {
        for (name, value) in command.prompts().iter().zip(args) {
            if value.is_empty() {
                return Err(SessionError::MissingArgument(*name));
            }
        }
        let arg = |idx: usize| args.get(idx).map(String::as_str).unwrap_or_default();

        match command {
            Command::AddShelf => {
                let (shelf, created) = self.registry.add_shelf(arg(0));
                let text = if created {
                    format!("Shelf \"{}\" created.", shelf)
                } else {
                    format!("Shelf \"{}\" already exists.", shelf)
                };
                self.reply(
                    text,
                    json!({"command": command.name(), "shelf": shelf, "created": created}),
                )?;
            }

            Command::AddDocument => {
                let shelf = self.registry.add_document(arg(0), arg(1), arg(2), arg(3))?;
                self.reply(
                    format!("Document \"{}\" added to shelf \"{}\".", arg(0), shelf),
                    json!({"command": command.name(), "document": arg(0), "shelf": shelf}),
                )?;
            }

            Command::ShowShelf => {
                let shelf = self.registry.shelf_of(arg(0))?.clone();
                self.reply(
                    format!("Document \"{}\" is on shelf \"{}\".", arg(0), shelf),
                    json!({"command": command.name(), "document": arg(0), "shelf": shelf}),
                )?;
            }

            Command::MoveDocument => {
                self.registry.move_document(arg(0), arg(1))?;
                let shelf = self.registry.shelf_of(arg(0))?.clone();
                self.reply(
                    format!("Document \"{}\" moved to shelf \"{}\".", arg(0), shelf),
                    json!({"command": command.name(), "document": arg(0), "shelf": shelf}),
                )?;
            }

            Command::AllOwners => {
                let owners: Vec<String> = self
                    .registry
                    .all_owner_names()
                    .into_iter()
                    .map(str::to_string)
                    .collect();

                if self.output.is_json() {
                    self.output.data(&json!({"command": command.name(), "owners": owners}))?;
                } else if owners.is_empty() {
                    self.output.line("No documents.")?;
                } else {
                    for owner in &owners {
                        self.output.line(owner)?;
                    }
                }
            }

            Command::ShowOwner => {
                let holder = self.registry.owner_of(arg(0))?.to_string();
                self.reply(
                    format!("Document \"{}\" belongs to {}.", arg(0), holder),
                    json!({"command": command.name(), "document": arg(0), "holder": holder}),
                )?;
            }

            Command::ListDocuments => {
                let documents: Vec<_> = self.registry.list_documents().cloned().collect();

                if self.output.is_json() {
                    self.output.data(&json!({"command": command.name(), "documents": documents}))?;
                } else if documents.is_empty() {
                    self.output.line("No documents.")?;
                } else {
                    for doc in &documents {
                        self.output.line(&doc.to_string())?;
                    }
                }
            }

            Command::DeleteDocument => {
                let (number, deleted) = self.registry.delete_document(arg(0));
                if !deleted {
                    return Err(RegistryError::NotFound(number).into());
                }
                self.reply(
                    format!("Document \"{}\" deleted.", number),
                    json!({"command": command.name(), "document": number, "deleted": true}),
                )?;
            }

            Command::Help => {
                if self.output.is_json() {
                    let commands: Vec<_> = COMMANDS
                        .iter()
                        .map(|spec| {
                            json!({
                                "token": spec.token,
                                "summary": spec.summary,
                                "prompts": spec.prompts,
                            })
                        })
                        .collect();
                    self.output.data(&json!({"command": command.name(), "commands": commands}))?;
                } else {
                    for spec in COMMANDS {
                        self.output.line(&format!("{:<4}{}", spec.token, spec.summary))?;
                    }
                }
            }

            // Handled by the loop
            Command::Quit => {}
        }

        Ok(())
    }

    /// Prints `text` in text mode or `data` in JSON mode
    fn reply(&mut self, text: String, data: serde_json::Value) -> io::Result<()> {
        self.output.line(&text)?;
        self.output.data(&data)
    }
}
