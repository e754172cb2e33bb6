use std::marker::PhantomData;

use bumpalo::collections::String as BumpString;
use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::render::render_node;
use crate::{Attribute, AttributeEntry, Context, Indentation};

/// The context-erased representation of a node.
///
/// [`Node`] values are thin typed wrappers over this; the context marker only
/// exists while constructors are being called and is erased the moment a node
/// becomes a child of another node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub(crate) enum NodeKind<'bump> {
    /// An element with a closing tag.
    Element {
        name: BumpString<'bump>,
        attributes: BumpVec<'bump, AttributeEntry<'bump>>,
        children: BumpVec<'bump, NodeKind<'bump>>,
    },
    /// A self-closing element.
    SelfClosing {
        name: BumpString<'bump>,
        attributes: BumpVec<'bump, AttributeEntry<'bump>>,
    },
    /// Text content, escaped on render.
    Text { text: BumpString<'bump> },
    /// Markup emitted verbatim.
    Raw { markup: BumpString<'bump> },
    /// A comment.
    Comment { text: BumpString<'bump> },
    /// A document-level declaration (doctype, XML prolog), emitted verbatim
    /// and never indented.
    Declaration { markup: BumpString<'bump> },
    /// Two or more sibling nodes behaving as one value. Structural only;
    /// contributes no markup of its own.
    Group {
        children: BumpVec<'bump, NodeKind<'bump>>,
    },
    /// Renders to nothing; the identity element for composition.
    Empty,
}

impl<'bump> NodeKind<'bump> {
    fn inner_text_into(&self, result: &mut BumpString<'bump>) {
        match self {
            NodeKind::Element { children, .. } | NodeKind::Group { children } => {
                for child in children.iter() {
                    child.inner_text_into(result);
                }
            }
            NodeKind::Text { text } => result.push_str(text.as_str()),
            NodeKind::SelfClosing { .. }
            | NodeKind::Raw { .. }
            | NodeKind::Comment { .. }
            | NodeKind::Declaration { .. }
            | NodeKind::Empty => {}
        }
    }
}

/// Append `kind` to `target`, splicing groups and dropping empties.
///
/// This is the eager-flattening rule: a child list never contains a
/// [`NodeKind::Group`] or [`NodeKind::Empty`] produced by composition.
pub(crate) fn flatten_into<'bump>(
    target: &mut BumpVec<'bump, NodeKind<'bump>>,
    kind: NodeKind<'bump>,
) {
    match kind {
        NodeKind::Empty => {}
        NodeKind::Group { children } => {
            for child in children {
                flatten_into(target, child);
            }
        }
        other => target.push(other),
    }
}

/// A node in a markup tree, tagged with the context it is valid in.
///
/// The marker type `C` is never stored: it constrains which constructors may
/// produce a `Node<C>` and is erased once the node is composed into a parent.
/// A node is either markup (element, self-closing element, text, raw, comment,
/// declaration) or a structural combinator (group, empty) that flattens away
/// during composition.
///
/// Nodes own their children outright; there is no sharing between trees.
pub struct Node<'bump, C> {
    pub(crate) kind: NodeKind<'bump>,
    marker: PhantomData<C>,
}

impl<C> std::fmt::Debug for Node<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}

impl<'bump, C> Clone for Node<'bump, C> {
    fn clone(&self) -> Self {
        Node {
            kind: self.kind.clone(),
            marker: PhantomData,
        }
    }
}

impl<C> PartialEq for Node<'_, C> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl<C> Default for Node<'_, C> {
    fn default() -> Self {
        Node {
            kind: NodeKind::Empty,
            marker: PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<C> serde::Serialize for Node<'_, C> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.kind.serialize(serializer)
    }
}

impl<'bump, C: Context> Node<'bump, C> {
    pub(crate) fn from_kind(kind: NodeKind<'bump>) -> Self {
        Node {
            kind,
            marker: PhantomData,
        }
    }

    /// Create an element with a closing tag.
    ///
    /// `Inner` is the context of the element's interior: both its attributes
    /// and its children are typed by it, while the element itself belongs to
    /// the caller's context `C`. Children are eagerly flattened, so a group or
    /// an empty node never survives into the stored child list.
    pub fn element<Inner, A, E>(bump: &'bump Bump, name: &str, attributes: A, children: E) -> Self
    where
        Inner: Context,
        A: IntoIterator<Item = Attribute<'bump, Inner>>,
        E: IntoNode<'bump, Inner>,
    {
        let mut kids = BumpVec::new_in(bump);
        flatten_into(&mut kids, children.into_node(bump).kind);
        Self::from_kind(NodeKind::Element {
            name: BumpString::from_str_in(name, bump),
            attributes: BumpVec::from_iter_in(attributes.into_iter().map(|a| a.entry), bump),
            children: kids,
        })
    }

    /// Create a self-closing element, e.g. `<br/>`.
    pub fn self_closing<Inner, A>(bump: &'bump Bump, name: &str, attributes: A) -> Self
    where
        Inner: Context,
        A: IntoIterator<Item = Attribute<'bump, Inner>>,
    {
        Self::from_kind(NodeKind::SelfClosing {
            name: BumpString::from_str_in(name, bump),
            attributes: BumpVec::from_iter_in(attributes.into_iter().map(|a| a.entry), bump),
        })
    }

    /// Create a text node. The content is escaped when rendered.
    pub fn text(bump: &'bump Bump, text: &str) -> Self {
        Self::from_kind(NodeKind::Text {
            text: BumpString::from_str_in(text, bump),
        })
    }

    /// Create a raw node. The content is emitted verbatim, with no escaping;
    /// the caller is responsible for well-formedness.
    pub fn raw(bump: &'bump Bump, markup: &str) -> Self {
        Self::from_kind(NodeKind::Raw {
            markup: BumpString::from_str_in(markup, bump),
        })
    }

    /// Create a comment node, rendered as `<!--text-->`.
    pub fn comment(bump: &'bump Bump, text: &str) -> Self {
        Self::from_kind(NodeKind::Comment {
            text: BumpString::from_str_in(text, bump),
        })
    }

    /// Create a document-level declaration such as `<!DOCTYPE html>`.
    ///
    /// The markup is emitted verbatim. Declarations are meant for a
    /// document's top level, where pretty rendering leaves them unindented
    /// on their own line; embedded deeper in a tree they are treated like
    /// any other structured child.
    pub fn declaration(bump: &'bump Bump, markup: &str) -> Self {
        Self::from_kind(NodeKind::Declaration {
            markup: BumpString::from_str_in(markup, bump),
        })
    }

    /// Create a node that renders to nothing.
    pub fn empty() -> Self {
        Self::from_kind(NodeKind::Empty)
    }

    /// Combine zero or more sibling nodes into a single node.
    ///
    /// Nested groups are spliced and empties dropped at construction time; a
    /// group of zero nodes collapses to [`Node::empty`] and a group of one to
    /// that node itself.
    pub fn group<I>(bump: &'bump Bump, nodes: I) -> Self
    where
        I: IntoIterator<Item = Node<'bump, C>>,
    {
        let mut children = BumpVec::new_in(bump);
        for node in nodes {
            flatten_into(&mut children, node.kind);
        }
        if children.len() == 1 {
            Self::from_kind(children.into_iter().next().unwrap())
        } else if children.is_empty() {
            Self::empty()
        } else {
            Self::from_kind(NodeKind::Group { children })
        }
    }

    /// Resolve to `then` if `condition` holds, or to [`Node::empty`].
    ///
    /// The decision is made once, eagerly, while the tree is assembled; there
    /// is no deferred evaluation.
    pub fn when(condition: bool, then: Node<'bump, C>) -> Self {
        if condition {
            then
        } else {
            Self::empty()
        }
    }

    /// Resolve to `then` if `condition` holds, or to `otherwise`.
    pub fn when_else(condition: bool, then: Node<'bump, C>, otherwise: Node<'bump, C>) -> Self {
        if condition {
            then
        } else {
            otherwise
        }
    }

    /// Map an ordered collection of items into a group of nodes.
    ///
    /// The output preserves the input order exactly; an empty collection
    /// yields [`Node::empty`].
    pub fn for_each<T, I, F>(bump: &'bump Bump, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T) -> Node<'bump, C>,
    {
        Self::group(bump, items.into_iter().map(f))
    }

    /// Render this node to a string.
    ///
    /// Rendering never fails and never mutates the node; the same node and
    /// indentation always produce the same bytes.
    pub fn render(&self, indentation: Indentation) -> String {
        let mut out = String::new();
        render_node(&mut out, &self.kind, indentation, 0);
        out
    }

    /// Get the tag name of the element if it is an element.
    pub fn tag(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element { name, .. } | NodeKind::SelfClosing { name, .. } => {
                Some(name.as_str())
            }
            _ => None,
        }
    }

    /// Get the attributes of the element if it is an element.
    pub fn attrs(&self) -> Option<&[AttributeEntry<'bump>]> {
        match &self.kind {
            NodeKind::Element { attributes, .. } | NodeKind::SelfClosing { attributes, .. } => {
                Some(attributes.as_slice())
            }
            _ => None,
        }
    }

    /// Get the concatenated text content of the node and its descendants.
    ///
    /// Raw markup and comments contribute nothing. Returns an empty string if
    /// no text exists.
    pub fn inner_text(&self, bump: &'bump Bump) -> BumpString<'bump> {
        let mut result = BumpString::new_in(bump);
        self.kind.inner_text_into(&mut result);
        result
    }

    /// Returns `true` if the node renders to nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.kind, NodeKind::Empty)
    }

    /// Returns `true` if the node is an element (closing or self-closing).
    #[must_use]
    pub fn is_element(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Element { .. } | NodeKind::SelfClosing { .. }
        )
    }

    /// Returns `true` if the node is a text node.
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self.kind, NodeKind::Text { .. })
    }

    /// Returns `true` if the node is a raw node.
    #[must_use]
    pub fn is_raw(&self) -> bool {
        matches!(self.kind, NodeKind::Raw { .. })
    }

    /// Returns `true` if the node is a group of siblings.
    #[must_use]
    pub fn is_group(&self) -> bool {
        matches!(self.kind, NodeKind::Group { .. })
    }
}

/// Trait for types that can be converted into a node with a bump allocator.
///
/// Strings become text nodes, `None` becomes [`Node::empty`], and arrays
/// become groups, so element builders accept a single child, a literal list of
/// children, or plain text without ceremony.
pub trait IntoNode<'bump, C: Context> {
    /// Convert this value into a node using the given bump allocator.
    fn into_node(self, bump: &'bump Bump) -> Node<'bump, C>;
}
impl<'bump, C: Context> IntoNode<'bump, C> for Node<'bump, C> {
    fn into_node(self, _bump: &'bump Bump) -> Node<'bump, C> {
        self
    }
}
impl<'bump, C: Context> IntoNode<'bump, C> for &str {
    fn into_node(self, bump: &'bump Bump) -> Node<'bump, C> {
        Node::text(bump, self)
    }
}
impl<'bump, C: Context> IntoNode<'bump, C> for String {
    fn into_node(self, bump: &'bump Bump) -> Node<'bump, C> {
        Node::text(bump, &self)
    }
}
impl<'bump, C: Context> IntoNode<'bump, C> for &String {
    fn into_node(self, bump: &'bump Bump) -> Node<'bump, C> {
        Node::text(bump, self)
    }
}
impl<'bump, C: Context, T: IntoNode<'bump, C>> IntoNode<'bump, C> for Option<T> {
    fn into_node(self, bump: &'bump Bump) -> Node<'bump, C> {
        match self {
            Some(node) => node.into_node(bump),
            None => Node::empty(),
        }
    }
}
impl<'bump, C: Context, const N: usize> IntoNode<'bump, C> for [Node<'bump, C>; N] {
    fn into_node(self, bump: &'bump Bump) -> Node<'bump, C> {
        Node::group(bump, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::{li, ul, BodyContext};

    #[test]
    fn group_collapses_at_construction() {
        let bump = Bump::new();
        let none = Node::<BodyContext>::group(&bump, []);
        assert!(none.is_empty());

        let one = Node::<BodyContext>::group(&bump, [Node::text(&bump, "x")]);
        assert_eq!(one, Node::text(&bump, "x"));
        assert!(one.is_text());
    }

    #[test]
    fn nested_groups_flatten_eagerly() {
        let bump = Bump::new();
        let inner = Node::<BodyContext>::group(
            &bump,
            [Node::text(&bump, "a"), Node::text(&bump, "b")],
        );
        let outer = Node::group(&bump, [inner, Node::empty(), Node::text(&bump, "c")]);
        let flat = Node::<BodyContext>::group(
            &bump,
            [
                Node::text(&bump, "a"),
                Node::text(&bump, "b"),
                Node::text(&bump, "c"),
            ],
        );
        assert_eq!(outer, flat);
    }

    #[test]
    fn when_resolves_eagerly() {
        let bump = Bump::new();
        let shown = Node::<BodyContext>::when(true, Node::text(&bump, "a"));
        assert_eq!(shown.render(Indentation::None), "a");

        let hidden = Node::<BodyContext>::when(false, Node::text(&bump, "a"));
        assert!(hidden.is_empty());
        assert_eq!(hidden.render(Indentation::None), "");

        let either = Node::<BodyContext>::when_else(
            false,
            Node::text(&bump, "a"),
            Node::text(&bump, "b"),
        );
        assert_eq!(either.render(Indentation::None), "b");
    }

    #[test]
    fn for_each_preserves_order() {
        let bump = Bump::new();
        let list = ul(&bump, [])(Node::for_each(&bump, ["a", "b", "c"], |item| {
            li(&bump, [])(item)
        }));
        assert_eq!(
            list.render(Indentation::None),
            "<ul><li>a</li><li>b</li><li>c</li></ul>"
        );
    }

    #[test]
    fn for_each_over_nothing_is_empty() {
        let bump = Bump::new();
        let nothing =
            Node::<BodyContext>::for_each(&bump, std::iter::empty::<&str>(), |item| {
                Node::text(&bump, item)
            });
        assert!(nothing.is_empty());
    }

    #[test]
    fn accessors() {
        let bump = Bump::new();
        let list = ul(&bump, [crate::attr(&bump, ("class", "tags"))])([
            li(&bump, [])("one"),
            li(&bump, [])("two"),
        ]);
        assert_eq!(list.tag(), Some("ul"));
        let attrs = list.attrs().unwrap();
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs[0].key.as_str(), "class");
        assert_eq!(list.inner_text(&bump).as_str(), "onetwo");
        assert!(list.is_element());
        assert!(!list.is_text());
    }
}
