//! Access to the remote webmail, one mailbox name at a time.

pub mod yopmail;

pub use yopmail::{Session, YopmailClient};

use crate::document::Document;
use crate::error::Result;

/// What the inbox needs from the remote site.
///
/// Implementations own whatever session state the site requires; callers
/// only pass the mailbox name and message ids.
pub trait Transport {
    type Doc: Document;

    /// One page (1-based) of the mail-list view.
    fn list_page(&self, name: &str, page: usize) -> Result<Self::Doc>;

    /// The full-message view of `id`.
    fn message_page(&self, name: &str, id: &str) -> Result<Self::Doc>;

    fn delete_message(&self, name: &str, id: &str) -> Result<()>;

    /// Clear the whole mailbox. The site wants the id of any message in it.
    fn flush_mailbox(&self, name: &str, id: &str) -> Result<()>;
}
