//! SnekByte: a terminal snake game with an optional WonQ obstacle mode.
//!
//! The `core` and `session` modules form a pure, synchronous state transducer
//! `(State, Event) -> State` with no I/O; `input` and `term` adapt crossterm
//! key events and a framebuffer renderer around it.

pub mod core;
pub mod input;
pub mod session;
pub mod term;
pub mod types;
