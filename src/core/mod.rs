//! The shell engine: byte classification, line editing, tokenizing,
//! completion and dispatch. Nothing in here allocates.

pub mod commands;
pub mod config;
pub mod keys;
pub mod line;
pub mod shell;
pub mod tokenizer;

mod completion;
