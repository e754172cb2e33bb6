#![deny(missing_docs)]
//! A crate for building structured markup documents (HTML, generic XML)
//! through a context-checked tree of nodes, and rendering that tree
//! deterministically to text.
//!
//! Every node carries a compile-time context marker describing where in the
//! document grammar it is valid; constructors are gated on those markers, so
//! an illegal composition fails to compile rather than surfacing at runtime.
//! The markers are zero-size and erased at construction — the tree itself is a
//! plain value type with no runtime checks.
//!
//! All allocations are done through a bump allocator ([`bumpalo::Bump`])
//! which must be passed to all node-creating functions.
//!
//! # Example
//!
//! ```
//! use stanza::{bumpalo::Bump, html, Indentation};
//!
//! let bump = Bump::new();
//! let page = html::document_with_doctype(
//!     &bump,
//!     html::html(&bump, [])([
//!         html::head(&bump, [])(html::title(&bump, "Hello")),
//!         html::body(&bump, [])(html::p(&bump, [])("Hello, world!")),
//!     ]),
//! );
//! assert_eq!(
//!     page.render(Indentation::None),
//!     "<!DOCTYPE html><html><head><title>Hello</title></head>\
//!      <body><p>Hello, world!</p></body></html>"
//! );
//! ```
//!
//! Trees compose through structural combinators — [`Node::group`],
//! [`Node::when`], [`Node::for_each`] — which resolve eagerly while the tree
//! is assembled and contribute no markup of their own.

// Re-export bumpalo for convenience
pub use bumpalo;

mod attribute;
pub use attribute::{attr, Attribute, AttributeEntry, AttributeValue, IntoAttribute};

mod context;
pub use context::{Context, DocumentFormat};

mod document;
pub use document::Document;

mod node;
pub use node::{IntoNode, Node};

mod render;
pub use render::Indentation;

pub mod html;
pub mod xml;
