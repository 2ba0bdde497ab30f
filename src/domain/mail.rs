use chrono::{DateTime, Utc};
use serde::Serialize;

/// Handle assigned by the remote site to every message.
pub type MailId = String;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Sender {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mail: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl Sender {
    pub fn is_empty(&self) -> bool {
        self.mail.is_empty() && self.name.is_empty()
    }
}

/// One row of the mail-list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailSummary {
    pub id: MailId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<Sender>,
    pub title: String,
    #[serde(rename = "isSPAM")]
    pub is_spam: bool,
}

/// A fully retrieved message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Mail {
    pub id: MailId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<Sender>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub body: String,
    #[serde(rename = "isSPAM")]
    pub is_spam: bool,
}
