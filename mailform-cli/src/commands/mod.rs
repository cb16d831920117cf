//! CLI commands

mod send;

pub use send::SendCommand;
