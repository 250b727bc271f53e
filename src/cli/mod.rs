//! # Command-Line Interface
//!
//! Interactive filing console and output formatting.
//!
//! ## Commands
//!
//! | Token | Action | Follow-up prompts |
//! |-------|--------|-------------------|
//! | `as` | Add a shelf | shelf |
//! | `a` | Add a document | number, type, holder, shelf |
//! | `s` | Show the shelf of a document | number |
//! | `m` | Move a document | number, shelf |
//! | `ap` | Show all holder names | |
//! | `p` | Show the holder of a document | number |
//! | `l` | List documents | |
//! | `d` | Delete a document | number |
//! | `h` | Help | |
//! | `q` | Quit | |
//!
//! ## Output Formats
//!
//! The `--format` flag selects:
//! - `text` (default) - Human-readable output with prompts
//! - `json` - One JSON object per result, no prompts
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! docshelf --verbose
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and start the command loop.

mod app;
mod commands;
mod output;
mod session;

pub use app::{run, Cli};
pub use commands::{Command, CommandSpec, UnknownCommand, COMMANDS};
pub use output::{Output, OutputFormat};
pub use session::{Session, SessionError};
