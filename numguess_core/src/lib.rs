//! ## Core
//! The core module for Numguess containing the console seam and the shared error type.
//! ### Modules
//! - Console (line based input and output the game talks through)
//! - Error (failures that can end a round early)
//!
//! ### Example
//! #### How to talk to the terminal
//! ```no_run
//! use numguess_core::{Console, StreamConsole};
//!
//! let mut console = StreamConsole::stdio();
//! console.write_line("Hello!").unwrap();
//! let reply = console.read_line().unwrap();
//! ```
mod console;
mod error;

pub use console::*;
pub use error::Error;
