//! Client for the YOPmail disposable inbox, working off the server-rendered
//! web pages.

pub mod config;
pub mod document;
pub mod domain;
pub mod error;
pub mod inbox;
pub mod parse;
pub mod render;
pub mod transport;

pub use error::{Error, Result};
pub use inbox::Inbox;
