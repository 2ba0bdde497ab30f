//! Read-only view over a retrieved page.
//!
//! Parsers only ever look pages up by CSS selector and read text or
//! attributes from the matches, so that is all a [`Document`] offers.

pub mod html;

pub use html::{HtmlDocument, HtmlNode};

pub trait Document {
    type Elem<'a>: Node<'a>
    where
        Self: 'a;

    /// All nodes matching `selector`, in document order.
    fn find<'a>(&'a self, selector: &str) -> Vec<Self::Elem<'a>>;
}

pub trait Node<'a>: Sized + Copy {
    /// Descendants of this node matching `selector`, in document order.
    fn find(&self, selector: &str) -> Vec<Self>;

    /// Concatenated text of the node and all its descendants.
    fn text(&self) -> String;

    fn attr(&self, key: &str) -> Option<&'a str>;

    /// Raw markup of the node's children.
    fn inner_html(&self) -> String;
}
