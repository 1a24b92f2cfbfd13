//! 命令行交互模块

mod completer;
mod input;
mod printer;
mod session;

pub use completer::{MenuCompleter, MENU_COMMANDS};
pub use input::{LineSource, ReadlineInput, ScriptedInput};
pub use printer::{menu_text, print_degrees, print_stats};
pub use session::{CommandResult, MenuCommand, Session};
