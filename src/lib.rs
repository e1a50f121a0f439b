//! Apple Catcher: catch the falling apples, dodge the bombs.
//!
//! The library holds the whole game core plus the host-agnostic pieces
//! (canvas, asset table, keyboard state, config). Terminal I/O lives in the
//! binary.

pub mod assets;
pub mod compute;
pub mod config;
pub mod controller;
pub mod entities;
pub mod input;
pub mod render;
pub mod surface;
