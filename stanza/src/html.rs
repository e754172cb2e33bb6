//! The HTML dialect: context markers, capabilities, and element builders.
//!
//! The element and attribute constructors here are the mechanical surface over
//! the core node model. Element builders are curried — attributes first, then
//! children — and are typed by the context of the element's interior, so a
//! node can only be placed where HTML's grammar permits it:
//!
//! ```
//! use stanza::{bumpalo::Bump, html, Indentation};
//!
//! let bump = Bump::new();
//! let list = html::ul(&bump, [])([
//!     html::li(&bump, [])("one"),
//!     html::li(&bump, [])("two"),
//! ]);
//! assert_eq!(list.render(Indentation::None), "<ul><li>one</li><li>two</li></ul>");
//! ```
//!
//! The context system is a conservative approximation of the HTML grammar: it
//! rejects structurally nonsensical composition at compile time but does not
//! police every validity rule. Placing a `<li>` directly in a `<body>` does
//! not compile:
//!
//! ```compile_fail
//! use stanza::{bumpalo::Bump, html};
//!
//! let bump = Bump::new();
//! let _ = html::body(&bump, [])(html::li(&bump, [])("stray"));
//! ```
//!
//! and neither does a capability-gated attribute in a context lacking the
//! capability — `href` requires a linkable context, which a `<div>` is not:
//!
//! ```compile_fail
//! use stanza::{bumpalo::Bump, html, Node};
//!
//! let bump = Bump::new();
//! let _ = html::div(&bump, [html::href(&bump, "/")])(Node::empty());
//! ```

use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::{Attribute, Context, Document, DocumentFormat, IntoNode, Node};

/// The HTML document format marker.
#[derive(Debug, Clone, Copy)]
pub enum Html {}
impl DocumentFormat for Html {
    type TopLevel = TopLevelContext;
}

macro_rules! contexts {
    ($($(#[$doc:meta])+ $name:ident,)*) => {
        $(
            $(#[$doc])+
            #[derive(Debug, Clone, Copy)]
            pub enum $name {}
            impl Context for $name {}
        )*
    };
}
contexts! {
    /// The top level of an HTML document: the doctype and the `<html>` root.
    TopLevelContext,
    /// Directly inside `<html>`: `<head>` and `<body>`.
    HtmlContext,
    /// Inside `<head>`.
    HeadContext,
    /// Flow content, inside `<body>` and most containers.
    BodyContext,
    /// Inside `<ul>` or `<ol>`: list items only.
    ListContext,
    /// Inside an `<a>` element.
    AnchorContext,
    /// The interior of an `<img>` element (attributes only).
    ImageContext,
    /// The interior of a `<link>` element (attributes only).
    LinkContext,
    /// The interior of a `<meta>` element (attributes only).
    MetaContext,
    /// Inside a `<script>` element.
    ScriptContext,
    /// Inside an `<audio>` element.
    AudioContext,
    /// Inside a `<video>` element.
    VideoContext,
    /// The interior of a `<source>` inside `<audio>`.
    AudioSourceContext,
    /// The interior of a `<source>` inside `<video>`.
    VideoSourceContext,
}

/// Capability: the context accepts `class` and `style` attributes.
pub trait Stylable: Context {}
/// Capability: the context accepts an `id` attribute.
pub trait Identifiable: Context {}
/// Capability: the context accepts an `href` attribute.
pub trait Linkable: Context {}
/// Capability: the context accepts a `src` attribute.
pub trait Sourceable: Context {}
/// Capability: a `<script>` element may appear in the context.
pub trait Scriptable: Context {}
/// Capability: the context is a media element that accepts playback
/// attributes and `<source>` children typed by [`Media::Source`].
pub trait Media: Context {
    /// The context of this media element's `<source>` children.
    type Source: Sourceable;
}

// Capability conformance is declared per leaf context, never inferred from
// overlapping capability sets.
impl Stylable for BodyContext {}
impl Stylable for ListContext {}
impl Stylable for AnchorContext {}
impl Stylable for ImageContext {}
impl Stylable for AudioContext {}
impl Stylable for VideoContext {}

impl Identifiable for BodyContext {}
impl Identifiable for ListContext {}
impl Identifiable for AnchorContext {}
impl Identifiable for ImageContext {}
impl Identifiable for LinkContext {}
impl Identifiable for AudioContext {}
impl Identifiable for VideoContext {}

impl Linkable for AnchorContext {}
impl Linkable for LinkContext {}

impl Sourceable for ImageContext {}
impl Sourceable for ScriptContext {}
impl Sourceable for AudioSourceContext {}
impl Sourceable for VideoSourceContext {}

impl Scriptable for HeadContext {}
impl Scriptable for BodyContext {}

impl Media for AudioContext {
    type Source = AudioSourceContext;
}
impl Media for VideoContext {
    type Source = VideoSourceContext;
}

macro_rules! container_builders {
    ($($name:ident: $parent:ty => $inner:ty;)*) => {
        $(
            #[doc = concat!(
                "Create a `<", stringify!($name), ">` element with a list of attributes.\n\n",
                "The children are passed in as a single argument to the returned function.",
            )]
            pub fn $name<'bump, A, E>(
                bump: &'bump Bump,
                attributes: A,
            ) -> impl FnOnce(E) -> Node<'bump, $parent>
            where
                A: IntoIterator<Item = Attribute<'bump, $inner>>,
                E: IntoNode<'bump, $inner>,
            {
                move |children: E| Node::element(bump, stringify!($name), attributes, children)
            }
        )*
    };
}
container_builders! {
    html: TopLevelContext => HtmlContext;
    head: HtmlContext => HeadContext;
    body: HtmlContext => BodyContext;
    div: BodyContext => BodyContext;
    p: BodyContext => BodyContext;
    h1: BodyContext => BodyContext;
    h2: BodyContext => BodyContext;
    h3: BodyContext => BodyContext;
    h4: BodyContext => BodyContext;
    h5: BodyContext => BodyContext;
    h6: BodyContext => BodyContext;
    span: BodyContext => BodyContext;
    em: BodyContext => BodyContext;
    strong: BodyContext => BodyContext;
    small: BodyContext => BodyContext;
    code: BodyContext => BodyContext;
    pre: BodyContext => BodyContext;
    blockquote: BodyContext => BodyContext;
    header: BodyContext => BodyContext;
    footer: BodyContext => BodyContext;
    nav: BodyContext => BodyContext;
    main: BodyContext => BodyContext;
    section: BodyContext => BodyContext;
    article: BodyContext => BodyContext;
    aside: BodyContext => BodyContext;
    ul: BodyContext => ListContext;
    ol: BodyContext => ListContext;
    li: ListContext => BodyContext;
    a: BodyContext => AnchorContext;
    audio: BodyContext => AudioContext;
    video: BodyContext => VideoContext;
}

macro_rules! void_builders {
    ($($name:ident: $parent:ty => $inner:ty;)*) => {
        $(
            #[doc = concat!(
                "Create a self-closing `<", stringify!($name), ">` element ",
                "with a list of attributes.",
            )]
            pub fn $name<'bump>(
                bump: &'bump Bump,
                attributes: impl IntoIterator<Item = Attribute<'bump, $inner>>,
            ) -> Node<'bump, $parent> {
                Node::self_closing(bump, stringify!($name), attributes)
            }
        )*
    };
}
void_builders! {
    br: BodyContext => BodyContext;
    hr: BodyContext => BodyContext;
    img: BodyContext => ImageContext;
    meta: HeadContext => MetaContext;
    link: HeadContext => LinkContext;
}

/// Create a `<title>` element with the given text.
pub fn title<'bump>(bump: &'bump Bump, text: &str) -> Node<'bump, HeadContext> {
    Node::element(
        bump,
        "title",
        std::iter::empty::<Attribute<'bump, HeadContext>>(),
        Node::<HeadContext>::text(bump, text),
    )
}

/// Create a `<style>` element with the given CSS text.
///
/// The content is emitted verbatim, since CSS routinely contains `>` and `&`
/// in selectors. Named with a trailing underscore to leave `style` for the
/// attribute constructor.
pub fn style_<'bump>(bump: &'bump Bump, css: &str) -> Node<'bump, HeadContext> {
    Node::element(
        bump,
        "style",
        std::iter::empty::<Attribute<'bump, HeadContext>>(),
        Node::<HeadContext>::raw(bump, css),
    )
}

/// Create a `<script>` element. Available in any [`Scriptable`] context, so
/// the same builder serves both `<head>` and flow content.
pub fn script<'bump, C, A, E>(bump: &'bump Bump, attributes: A) -> impl FnOnce(E) -> Node<'bump, C>
where
    C: Scriptable,
    A: IntoIterator<Item = Attribute<'bump, ScriptContext>>,
    E: IntoNode<'bump, ScriptContext>,
{
    move |children: E| Node::element(bump, "script", attributes, children)
}

/// Create a `<source>` element for a [`Media`] context. Its attributes are
/// typed by the media element's associated source context.
pub fn source<'bump, C: Media>(
    bump: &'bump Bump,
    attributes: impl IntoIterator<Item = Attribute<'bump, C::Source>>,
) -> Node<'bump, C> {
    Node::self_closing(bump, "source", attributes)
}

/// Create a `class` attribute. Requires a [`Stylable`] context.
pub fn class<'bump, C: Stylable>(bump: &'bump Bump, value: &str) -> Attribute<'bump, C> {
    Attribute::new(bump, "class", value)
}

/// Create an inline `style` attribute. Requires a [`Stylable`] context.
pub fn style<'bump, C: Stylable>(bump: &'bump Bump, value: &str) -> Attribute<'bump, C> {
    Attribute::new(bump, "style", value)
}

/// Create an `id` attribute. Requires an [`Identifiable`] context.
pub fn id<'bump, C: Identifiable>(bump: &'bump Bump, value: &str) -> Attribute<'bump, C> {
    Attribute::new(bump, "id", value)
}

/// Create an `href` attribute. Requires a [`Linkable`] context.
pub fn href<'bump, C: Linkable>(bump: &'bump Bump, value: &str) -> Attribute<'bump, C> {
    Attribute::new(bump, "href", value)
}

/// Create a `src` attribute. Requires a [`Sourceable`] context.
pub fn src<'bump, C: Sourceable>(bump: &'bump Bump, value: &str) -> Attribute<'bump, C> {
    Attribute::new(bump, "src", value)
}

/// Create a bare `controls` attribute. Requires a [`Media`] context.
pub fn controls<'bump, C: Media>(bump: &'bump Bump) -> Attribute<'bump, C> {
    Attribute::boolean(bump, "controls")
}

/// Create a bare `autoplay` attribute. Requires a [`Media`] context.
pub fn autoplay<'bump, C: Media>(bump: &'bump Bump) -> Attribute<'bump, C> {
    Attribute::boolean(bump, "autoplay")
}

/// Create the `<!DOCTYPE html>` declaration.
pub fn doctype<'bump>(bump: &'bump Bump) -> Node<'bump, TopLevelContext> {
    Node::declaration(bump, "<!DOCTYPE html>")
}

/// Create an HTML document from top-level nodes.
pub fn document<'bump>(
    bump: &'bump Bump,
    nodes: impl IntoIterator<Item = Node<'bump, TopLevelContext>>,
) -> Document<'bump, Html> {
    Document::new(bump, nodes)
}

/// Create an HTML document with a doctype declaration followed by the given
/// root element.
pub fn document_with_doctype<'bump>(
    bump: &'bump Bump,
    root: Node<'bump, TopLevelContext>,
) -> Document<'bump, Html> {
    let mut nodes = BumpVec::with_capacity_in(2, bump);
    nodes.push(doctype(bump));
    nodes.push(root);
    Document::new(bump, nodes)
}
