//! Solution logic for the MidTown IT training hub: a two-player Rock Paper
//! Scissors session, a multiplication table generator and a Caesar cipher.
//!
//! The `engine` module holds the logic and the display traits it writes
//! through; `model` holds the plain data types shared with the shell.

pub mod engine;
pub mod model;

pub use crate::engine::display::{
    HubDisplay, InputSource, PlayerBoard, ScreenSwitch, StatusSink, TextSink,
};
pub use crate::engine::hub::Hub;
pub use crate::engine::protocol::HubCommand;
pub use crate::model::validation::{FieldError, ValidationError};
