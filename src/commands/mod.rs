pub mod console_command;
pub mod terminal;

pub use console_command::ConsoleCommand;
pub use terminal::{render_details, render_list, run_terminal};
