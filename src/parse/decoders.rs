use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use log::debug;

/// Layout of the date line shown above a message,
/// e.g. `Sunday, June 13, 2021 8:57:08 PM`.
const DATE_LAYOUT: &str = "%A, %B %d, %Y %I:%M:%S %p";

// Wide enough that html2text never wraps a paragraph.
const BODY_WIDTH: usize = 1000;

/// Split a `From` header into `(name, mail)`.
///
/// `John Doe <john.doe@unknown.com>` gives both parts; text without an
/// angle-bracket pair is taken as a bare address.
pub fn parse_from(raw: &str) -> (String, String) {
    if let Some(open) = raw.find('<')
        && let Some(len) = raw[open + 1..].find('>')
    {
        let name = raw[..open].trim();
        let mail = raw[open + 1..open + 1 + len].trim();
        return (name.to_string(), mail.to_string());
    }
    (String::new(), raw.trim().to_string())
}

/// Parse the long-form date line. Anything else yields `None`.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    match NaiveDateTime::parse_from_str(raw, DATE_LAYOUT) {
        Ok(naive) => Some(Utc.from_utc_datetime(&naive)),
        Err(e) => {
            if !raw.is_empty() {
                debug!("unparsable mail date {raw:?}: {e}");
            }
            None
        }
    }
}

/// Visible text of an HTML fragment, or an empty string when it can't be
/// converted.
pub fn html_to_text(html: &str) -> String {
    match html2text::from_read(html.as_bytes(), BODY_WIDTH) {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            debug!("could not convert mail body to text: {e}");
            String::new()
        }
    }
}
