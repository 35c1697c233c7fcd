//! This module implements the [Go Text Protocol](http://www.lysator.liu.se/~gunnar/gtp/).

/// A Go Text Protocol Command.
pub mod command;
/// A GTP engine that accepts commands and returns reponses.
pub mod engine;
/// The wire-visible error kinds a GTP reply can carry.
pub mod error;
/// The result of executing a Go Text Protocol Command.
pub mod response;
