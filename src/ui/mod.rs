pub mod colors;
pub mod interactive;
pub mod page;
pub mod table;

pub use interactive::{ViewState, run_interactive_ui};
pub use page::{MatchupPage, footer_hints, two_column_width};
