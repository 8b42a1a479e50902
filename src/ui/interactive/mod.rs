//! Interactive viewer
//!
//! - `input_handler`: key events to actions
//! - `state`: week, mode and selection cursors
//! - `terminal_manager`: raw mode and alternate screen
//! - `core`: the fetch/render/input loop

mod core;
mod input_handler;
mod state;
mod terminal_manager;

pub use core::*;
pub use input_handler::{Action, action_for_key};
pub use state::{Effect, ViewState};
pub use terminal_manager::TerminalManager;
