//! A minimal generic XML dialect.
//!
//! XML has no fixed vocabulary, so a single content context covers the whole
//! tree and elements are built by name. This is the extension point for
//! XML-derived formats such as feeds:
//!
//! ```
//! use stanza::{bumpalo::Bump, xml, Indentation};
//!
//! let bump = Bump::new();
//! let feed = xml::document(
//!     &bump,
//!     [
//!         xml::prolog(&bump),
//!         xml::element(&bump, "channel", [])([
//!             xml::element(&bump, "title", [])("News & views"),
//!             xml::element(&bump, "link", [])("https://example.com"),
//!         ]),
//!     ],
//! );
//! assert_eq!(
//!     feed.render(Indentation::None),
//!     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
//!      <channel><title>News &amp; views</title>\
//!      <link>https://example.com</link></channel>"
//! );
//! ```

use bumpalo::collections::String as BumpString;
use bumpalo::Bump;

use crate::{Attribute, Context, Document, DocumentFormat, IntoAttribute, IntoNode, Node};

/// The XML document format marker.
#[derive(Debug, Clone, Copy)]
pub enum Xml {}
impl DocumentFormat for Xml {
    type TopLevel = ContentContext;
}

/// The single context of generic XML content.
#[derive(Debug, Clone, Copy)]
pub enum ContentContext {}
impl Context for ContentContext {}

/// Create the standard XML prolog declaration.
pub fn prolog<'bump>(bump: &'bump Bump) -> Node<'bump, ContentContext> {
    Node::declaration(bump, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")
}

/// Create an element with the given name and a list of attributes.
///
/// The children are passed in as a single argument to the returned function.
pub fn element<'bump, A, E>(
    bump: &'bump Bump,
    name: &str,
    attributes: A,
) -> impl FnOnce(E) -> Node<'bump, ContentContext>
where
    A: IntoIterator<Item = Attribute<'bump, ContentContext>>,
    E: IntoNode<'bump, ContentContext>,
{
    let name = BumpString::from_str_in(name, bump);
    move |children: E| Node::element(bump, name.as_str(), attributes, children)
}

/// Create a self-closing element with the given name and attributes.
pub fn empty_element<'bump>(
    bump: &'bump Bump,
    name: &str,
    attributes: impl IntoIterator<Item = Attribute<'bump, ContentContext>>,
) -> Node<'bump, ContentContext> {
    Node::self_closing(bump, name, attributes)
}

/// Create an attribute from a value that implements
/// [`IntoAttribute`](crate::IntoAttribute).
pub fn attr<'bump>(
    bump: &'bump Bump,
    value: impl IntoAttribute<'bump>,
) -> Attribute<'bump, ContentContext> {
    crate::attr(bump, value)
}

/// Create an XML document from top-level nodes.
pub fn document<'bump>(
    bump: &'bump Bump,
    nodes: impl IntoIterator<Item = Node<'bump, ContentContext>>,
) -> Document<'bump, Xml> {
    Document::new(bump, nodes)
}
