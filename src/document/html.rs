use log::warn;
use scraper::{ElementRef, Html, Selector};

use crate::document::{Document, Node};

/// A page parsed with a browser-grade HTML parser.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }
}

impl std::fmt::Debug for HtmlDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlDocument").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HtmlNode<'a> {
    element: ElementRef<'a>,
}

// Selectors are compile-time constants in this crate; a bad one is logged
// and matches nothing.
fn compile(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(s) => Some(s),
        Err(e) => {
            warn!("invalid selector {selector:?}: {e}");
            None
        }
    }
}

impl Document for HtmlDocument {
    type Elem<'a> = HtmlNode<'a>;

    fn find<'a>(&'a self, selector: &str) -> Vec<HtmlNode<'a>> {
        let Some(sel) = compile(selector) else {
            return vec![];
        };
        self.html
            .select(&sel)
            .map(|element| HtmlNode { element })
            .collect()
    }
}

impl<'a> Node<'a> for HtmlNode<'a> {
    fn find(&self, selector: &str) -> Vec<Self> {
        let Some(sel) = compile(selector) else {
            return vec![];
        };
        self.element
            .select(&sel)
            .map(|element| HtmlNode { element })
            .collect()
    }

    fn text(&self) -> String {
        self.element.text().collect()
    }

    fn attr(&self, key: &str) -> Option<&'a str> {
        self.element.value().attr(key)
    }

    fn inner_html(&self) -> String {
        self.element.inner_html()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
        <div class="m" id="e_1"><span class="lmf">alice</span><div class="lms">Hello</div></div>
        <div class="m"><span class="lmf">bob</span></div>
    </body></html>"#;

    #[test]
    fn test_find_in_document_order() {
        let doc = HtmlDocument::parse(PAGE);
        let nodes = doc.find("div.m");
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].attr("id"), Some("e_1"));
        assert_eq!(nodes[1].attr("id"), None);
    }

    #[test]
    fn test_nested_find_and_text() {
        let doc = HtmlDocument::parse(PAGE);
        let first = doc.find("div.m")[0];
        let labels = first.find("span.lmf");
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].text(), "alice");
        assert_eq!(first.find("div.lms")[0].text(), "Hello");
    }

    #[test]
    fn test_invalid_selector_matches_nothing() {
        let doc = HtmlDocument::parse(PAGE);
        assert!(doc.find("div[").is_empty());
    }

    #[test]
    fn test_inner_html_keeps_markup() {
        let doc = HtmlDocument::parse(r#"<div id="mail"><p>hi <b>there</b></p></div>"#);
        let node = doc.find("#mail")[0];
        assert_eq!(node.inner_html(), "<p>hi <b>there</b></p>");
    }
}
