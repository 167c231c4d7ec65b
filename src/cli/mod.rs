pub(crate) mod args;
pub(crate) mod commands;
pub(crate) mod picker;

pub(crate) use args::Cli;
pub(crate) use commands::{Steps, parse_command};
pub(crate) use picker::{Picker, TerminalPicker};
