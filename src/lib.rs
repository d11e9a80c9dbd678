//! Label-driven window switching.
//!
//! Every window on the active workspace gets a one-letter label and a small
//! badge; pressing the letter activates the window. With two windows or fewer
//! the switch happens without showing anything.

pub mod actor;
pub mod common;
pub mod layout_engine;
pub mod model;
pub mod sys;
pub mod ui;
