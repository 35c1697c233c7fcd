//! # tenuki
//!
//! A Go engine that speaks the [Go Text Protocol](http://www.lysator.liu.se/~gunnar/gtp/)
//! (GTP v2). It contains two sub-modules: `game` and `gtp`. `game` holds the board model
//! and move generator; `gtp` holds the protocol dispatcher that drives them over stdio.

#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

pub mod game;
pub mod gtp;
