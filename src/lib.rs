//! A small line-editing command shell for byte-oriented consoles.
//!
//! The engine in [`core`](crate::core) reads one byte at a time through a [`CharIo`],
//! edits a fixed-capacity command line, and dispatches completed lines to a
//! caller-owned table of [`Command`]s. It never allocates.
#![cfg_attr(not(feature = "std"), no_std)]

pub mod core;
pub mod io;

#[cfg(feature = "std")]
pub mod error;
#[cfg(feature = "std")]
pub mod flags;
#[cfg(feature = "std")]
pub mod highlight;
#[cfg(feature = "std")]
pub mod platform;

pub use crate::core::commands::{Command, CommandError, Dispatch, Handler};
pub use crate::core::config::{LineEnding, ShellConfig};
pub use crate::core::shell::{Shell, CMDLINE_CAPACITY, MAX_ARGS, PROMPT};
pub use crate::io::CharIo;
