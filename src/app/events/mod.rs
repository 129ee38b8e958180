//! ArrowIntent- und ArrowCommand-Enums für den Intent/Command-Datenfluss.

mod action;
mod command;
mod intent;

pub use action::MenuAction;
pub use command::ArrowCommand;
pub use intent::ArrowIntent;
