use crate::document::{Document, Node};
use crate::domain::mail::{Mail, Sender};
use crate::parse::decoders::{html_to_text, parse_date, parse_from};

const TITLE: &str = "header .ellipsis.nw.b.f18";
const FROM: &str = "header .ellipsis.b.f14";
const DATE: &str = "header .ellipsis.f14.mgd";
const BODY: &str = "#mail";

/// Build a [`Mail`] from the full-message view.
///
/// The page doesn't carry the message id nor a reliable spam flag; callers
/// fill those in from the summary the page was fetched for.
pub fn parse_mail<D: Document>(doc: &D) -> Mail {
    let (name, mail) = parse_from(&first_text(doc, FROM));
    let body = doc
        .find(BODY)
        .first()
        .map(|node| html_to_text(&node.inner_html()))
        .unwrap_or_default();

    Mail {
        id: String::new(),
        sender: Some(Sender { mail, name }),
        title: first_text(doc, TITLE).trim().to_string(),
        date: parse_date(&first_text(doc, DATE)),
        body,
        is_spam: false,
    }
}

fn first_text<D: Document>(doc: &D, selector: &str) -> String {
    doc.find(selector)
        .first()
        .map(|n| n.text())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::HtmlDocument;

    const MAIL: &str = include_str!("../../tests/fixtures/mail.html");

    #[test]
    fn test_parse_mail() {
        let mail = parse_mail(&HtmlDocument::parse(MAIL));
        let sender = mail.sender.unwrap();
        assert_eq!(sender.name, "Liana");
        assert_eq!(sender.mail, "AnnaMartinezpisea@lionspest.com.au");
        assert_eq!(mail.title, "In any case, I am happy that we met");
        assert_eq!(
            mail.date.unwrap().to_rfc3339(),
            "2021-06-13T20:57:08+00:00"
        );
        assert!(mail.body.contains("What such a gorgeous man is doing here?"));
        assert!(mail.body.contains("Will you come to me on the weekend?"));
        assert!(!mail.body.contains("<p>"));
        assert!(mail.id.is_empty());
    }

    #[test]
    fn test_parse_page_without_content() {
        let mail = parse_mail(&HtmlDocument::parse("<html><body></body></html>"));
        assert_eq!(mail.sender, Some(Sender::default()));
        assert_eq!(mail.title, "");
        assert_eq!(mail.date, None);
        assert_eq!(mail.body, "");
    }
}
