//! Turns retrieved pages into domain records.
//!
//! Both parsers are lenient: a missing node or an unexpected value leaves the
//! matching field empty instead of failing the whole page.

pub mod decoders;
pub mod inbox_page;
pub mod mail;

pub use inbox_page::parse_inbox_page;
pub use mail::parse_mail;
