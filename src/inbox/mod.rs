//! In-memory mirror of a remote inbox.

use log::{debug, info};
use serde::Serialize;
use std::{thread, time::Duration};

use crate::domain::mail::{Mail, MailSummary};
use crate::error::Result;
use crate::parse::{parse_inbox_page, parse_mail};
use crate::transport::Transport;

/// Number of summaries the mail-list view shows per page.
pub const ITEMS_PER_PAGE: usize = 15;

/// Pause between two list-page requests.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_secs(1);

/// Summaries of one mailbox, most recent first, plus the operations that
/// act on them remotely.
///
/// Positions are indices into [`Inbox::items`] and only hold until the next
/// [`Inbox::delete`] or [`Inbox::flush`].
pub struct Inbox<T: Transport> {
    name: String,
    items: Vec<MailSummary>,
    transport: T,
    page_delay: Duration,
}

/// Serializable view of an inbox.
#[derive(Debug, Serialize)]
pub struct InboxSnapshot<'a> {
    pub name: &'a str,
    pub mails: &'a [MailSummary],
}

impl<T: Transport> Inbox<T> {
    pub fn new(name: impl Into<String>, transport: T) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            transport,
            page_delay: DEFAULT_PAGE_DELAY,
        }
    }

    pub fn with_page_delay(mut self, page_delay: Duration) -> Self {
        self.page_delay = page_delay;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[MailSummary] {
        &self.items
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    pub fn snapshot(&self) -> InboxSnapshot<'_> {
        InboxSnapshot {
            name: &self.name,
            mails: &self.items,
        }
    }

    /// Walk the list pages until `limit` summaries are held or the page
    /// budget (`limit / ITEMS_PER_PAGE + 1`) is spent, then keep the first
    /// `limit`.
    ///
    /// Summaries are appended to what is already held. A transport error
    /// stops the walk and is returned as is; pages read so far stay.
    pub fn accumulate(&mut self, limit: usize) -> Result<()> {
        if limit == 0 {
            self.shrink(0);
            return Ok(());
        }

        let last_page = limit / ITEMS_PER_PAGE + 1;
        let mut page = 1;
        while page <= last_page && limit >= self.count() {
            if page > 1 && !self.page_delay.is_zero() {
                thread::sleep(self.page_delay);
            }

            let doc = self.transport.list_page(&self.name, page)?;
            let found = parse_inbox_page(&doc);
            debug!(
                "{}: page {page} gave {} mails ({} held)",
                self.name,
                found.len(),
                self.count() + found.len()
            );
            self.items.extend(found);
            page += 1;
        }
        debug!("{}: stopped after page {}", self.name, page - 1);

        self.shrink(limit);
        Ok(())
    }

    /// Retrieve the full message at `position`.
    ///
    /// Panics if `position >= self.count()`.
    pub fn fetch(&self, position: usize) -> Result<Mail> {
        let summary = &self.items[position];
        let doc = self.transport.message_page(&self.name, &summary.id)?;
        let mut mail = parse_mail(&doc);
        mail.id = summary.id.clone();
        mail.is_spam = summary.is_spam;
        Ok(mail)
    }

    /// Delete the message at `position` remotely, then drop it locally.
    ///
    /// Panics if `position >= self.count()`.
    pub fn delete(&mut self, position: usize) -> Result<()> {
        let id = &self.items[position].id;
        self.transport.delete_message(&self.name, id)?;
        info!("{}: deleted {id}", self.name);
        self.items.remove(position);
        Ok(())
    }

    /// Empty the remote mailbox and the local mirror.
    pub fn flush(&mut self) -> Result<()> {
        let Some(first) = self.items.first() else {
            return Ok(());
        };
        self.transport.flush_mailbox(&self.name, &first.id)?;
        info!("{}: flushed", self.name);
        self.items.clear();
        Ok(())
    }

    /// Keep at most the first `limit` summaries.
    pub fn shrink(&mut self, limit: usize) {
        self.items.truncate(limit);
    }
}
