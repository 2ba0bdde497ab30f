use crate::document::{Document, Node};
use crate::domain::mail::{MailSummary, Sender};

const MESSAGE: &str = "div.m";
const LABEL: &str = "span.lmf";
const TITLE: &str = "div.lms";

/// Marker the list view puts in front of the sender of a message it
/// classified as spam.
pub const SPAM_PREFIX: &str = "[SPAM]";

/// Summaries found on one page of the mail-list view, in display order.
///
/// Rows without an `id` attribute can't be fetched or deleted later and are
/// skipped.
pub fn parse_inbox_page<D: Document>(doc: &D) -> Vec<MailSummary> {
    doc.find(MESSAGE)
        .into_iter()
        .filter_map(|row| {
            let id = row.attr("id")?;
            let (sender, is_spam) = parse_label(&first_text(&row, LABEL));
            Some(MailSummary {
                id: id.to_string(),
                sender: Some(sender),
                title: first_text(&row, TITLE).trim().to_string(),
                is_spam,
            })
        })
        .collect()
}

fn first_text<'a, N: Node<'a>>(node: &N, selector: &str) -> String {
    node.find(selector)
        .first()
        .map(|n| n.text())
        .unwrap_or_default()
}

/// The list only shows one sender label: an address when the sender had no
/// display name, the name otherwise.
fn parse_label(raw: &str) -> (Sender, bool) {
    let mut label = raw.trim();
    let is_spam = match label.strip_prefix(SPAM_PREFIX) {
        Some(rest) => {
            label = rest.trim_start();
            true
        }
        None => false,
    };

    let sender = if label.contains('@') {
        Sender {
            mail: label.to_string(),
            name: String::new(),
        }
    } else {
        Sender {
            mail: String::new(),
            name: label.to_string(),
        }
    };
    (sender, is_spam)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::HtmlDocument;

    const INBOX_PAGE: &str = include_str!("../../tests/fixtures/inbox_page_1.html");
    const INBOX_EMPTY: &str = include_str!("../../tests/fixtures/inbox_empty.html");

    #[test]
    fn test_parse_full_page() {
        let items = parse_inbox_page(&HtmlDocument::parse(INBOX_PAGE));
        assert_eq!(items.len(), 15);
        assert_eq!(items[0].id, "e_ZwRjAwRmZGtmAwZ1ZQNjAwt5AQZmZj==");
        assert_eq!(items[14].id, "e_ZwRjAwRmZGtmZwN3ZQNjAwt3AmZlAD==");
    }

    #[test]
    fn test_parse_empty_page() {
        assert!(parse_inbox_page(&HtmlDocument::parse(INBOX_EMPTY)).is_empty());
    }

    #[test]
    fn test_name_label() {
        let items = parse_inbox_page(&HtmlDocument::parse(INBOX_PAGE));
        let first = &items[0];
        assert_eq!(
            first.sender,
            Some(Sender {
                mail: String::new(),
                name: "Liana".to_string(),
            })
        );
        assert_eq!(first.title, "In any case, I am happy that we met");
        assert!(!first.is_spam);
    }

    #[test]
    fn test_mail_label() {
        let items = parse_inbox_page(&HtmlDocument::parse(INBOX_PAGE));
        let second = &items[1];
        assert_eq!(
            second.sender,
            Some(Sender {
                mail: "newsletter@shop.example".to_string(),
                name: String::new(),
            })
        );
    }

    #[test]
    fn test_spam_label() {
        let items = parse_inbox_page(&HtmlDocument::parse(INBOX_PAGE));
        let spam = &items[2];
        assert!(spam.is_spam);
        assert_eq!(spam.sender.as_ref().unwrap().name, "Lucky Winner");
        assert_eq!(spam.sender.as_ref().unwrap().mail, "");

        let (sender, is_spam) = parse_label("[SPAM]promo@deals.example");
        assert!(is_spam);
        assert_eq!(sender.mail, "promo@deals.example");
        assert_eq!(sender.name, "");
    }

    #[test]
    fn test_rows_without_id_are_skipped() {
        let doc = HtmlDocument::parse(
            r#"<div class="m"><span class="lmf">ghost</span><div class="lms">no id</div></div>
               <div class="m" id="e_2"><span class="lmf">real</span><div class="lms">kept</div></div>"#,
        );
        let items = parse_inbox_page(&doc);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "e_2");
        assert_eq!(items[0].title, "kept");
    }
}
