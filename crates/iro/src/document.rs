//! Documents, i.e., trees of text and style elements.
//!
//! A [`Document`] is a sequence of [`Node`]s together with its [`Options`].
//! Text nodes are painted as is. Element nodes update the style for the
//! following siblings, including nested groups. Groups and nested documents
//! open a new scope: once they are painted, the enclosing scope's style is
//! restored.
//!
//!
//! # Example
//!
//! ```
//! # use iro::document::Document;
//! # use iro::nodes;
//! # use iro::opt::Options;
//! # use iro::style::Attribute;
//! let doc = Document::with_options(
//!     nodes![Attribute::Bold, "bold", nodes![Attribute::Dim, "bold-dim"], "bold"],
//!     Options::with_separator(" "),
//! );
//!
//! assert_eq!(
//!     doc.render(),
//!     "\x1b[1mbold \x1b[2mbold-dim\x1b[22m\x1b[1m bold\x1b[0m"
//! );
//! ```

use std::ops::Add;

use crate::error::Error;
use crate::opt::Options;
use crate::paint::paint;
use crate::style::{Attribute, Color, Disable, Element, Font, Style};

/// Create a vector of nodes from a comma-separated list of text, elements,
/// documents, and nested vectors of nodes.
///
/// ```
/// # use iro::document::Node;
/// # use iro::nodes;
/// # use iro::style::{Attribute, Element};
/// let nodes = nodes!["plain", Attribute::Italic, nodes!["nested"]];
/// assert_eq!(nodes.len(), 3);
/// assert_eq!(nodes[1], Node::Element(Element::Enable(Attribute::Italic)));
/// ```
#[macro_export]
macro_rules! nodes {
    ($($node:expr),* $(,)?) => {{
        let nodes: ::std::vec::Vec<$crate::document::Node> =
            ::std::vec![$($crate::document::Node::from($node)),*];
        nodes
    }};
}

/// A document node.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Literal text.
    Text(String),
    /// A style element affecting all following siblings.
    Element(Element),
    /// A nested scope painted with the enclosing document's options.
    Group(Vec<Node>),
    /// A nested scope painted with its own separator and collection strategy.
    Document(Document),
}

impl Node {
    /// Determine whether this node is visible, i.e., not a style element.
    pub const fn is_visible(&self) -> bool {
        !matches!(*self, Self::Element(_))
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Self::Element(value)
    }
}

impl From<Attribute> for Node {
    fn from(value: Attribute) -> Self {
        Self::Element(value.into())
    }
}

impl From<Disable> for Node {
    fn from(value: Disable) -> Self {
        Self::Element(value.into())
    }
}

impl From<Color> for Node {
    fn from(value: Color) -> Self {
        Self::Element(value.into())
    }
}

impl From<Font> for Node {
    fn from(value: Font) -> Self {
        Self::Element(value.into())
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Self::Group(value)
    }
}

impl From<Document> for Node {
    fn from(value: Document) -> Self {
        Self::Document(value)
    }
}

/// A document.
///
/// Documents are immutable once built. Rendering a document does not change
/// it and always produces the same string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    nodes: Vec<Node>,
    options: Options,
}

impl Document {
    /// Create a new document with the default options.
    pub fn new(nodes: Vec<Node>) -> Self {
        Self::with_options(nodes, Options::default())
    }

    /// Create a new document with the given options.
    pub fn with_options(nodes: Vec<Node>, options: Options) -> Self {
        Self { nodes, options }
    }

    /// Get the nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Get the options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Render this document into a string of text and ANSI escape sequences.
    ///
    /// The result always ends with the reset sequence.
    pub fn render(&self) -> String {
        self.render_from(&Style::default())
    }

    /// Render this document, assuming the terminal already has the given
    /// style.
    pub fn render_from(&self, style: &Style) -> String {
        paint(self, style)
    }

    /// Concatenate this document with the given node.
    ///
    /// Only text and documents can be concatenated with a document. This
    /// method fails for elements and groups.
    pub fn try_concat(self, other: Node) -> Result<Self, Error> {
        match other {
            Node::Text(text) => Ok(self + text.as_str()),
            Node::Document(doc) => Ok(self + doc),
            Node::Element(_) | Node::Group(_) => Err(Error::UnsupportedConcatenation),
        }
    }
}

impl From<&str> for Document {
    fn from(value: &str) -> Self {
        Self::new(vec![value.into()])
    }
}

impl From<Vec<Node>> for Document {
    fn from(value: Vec<Node>) -> Self {
        Self::new(value)
    }
}

impl Add<&str> for Document {
    type Output = Document;

    fn add(mut self, rhs: &str) -> Self::Output {
        self.nodes.push(rhs.into());
        self
    }
}

impl Add<Document> for &str {
    type Output = Document;

    fn add(self, mut rhs: Document) -> Self::Output {
        rhs.nodes.insert(0, self.into());
        rhs
    }
}

impl Add for Document {
    type Output = Document;

    /// Join the two documents' nodes into one document with default options,
    /// though 24-bit colors stay disabled if either document disables them.
    fn add(mut self, rhs: Document) -> Self::Output {
        let disabled = self.options.is_rgb_output_disabled() || rhs.options.is_rgb_output_disabled();
        self.nodes.extend(rhs.nodes);
        Document::with_options(
            self.nodes,
            Options::builder().disable_rgb_output(disabled).build(),
        )
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
