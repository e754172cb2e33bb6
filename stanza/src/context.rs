//! Compile-time context markers.
//!
//! A context names a position in a document's grammar ("inside `<head>`",
//! "inside a list"). Contexts are uninhabited zero-size types: they are never
//! stored in a tree and never exist at runtime. Their only job is to constrain
//! which constructor calls type-check, so an illegal composition is rejected
//! when the tree is built rather than when it is rendered.

/// Marker trait implemented by every context type.
///
/// Leaf contexts additionally opt in to cross-cutting capabilities (see
/// [`crate::html`] for the HTML ones) through explicit `impl` blocks. There is
/// no inference: a context only has the capabilities it declares.
pub trait Context {}

/// A document dialect, such as [`crate::html::Html`] or [`crate::xml::Xml`].
///
/// The format marker doubles as the root of that dialect's context graph: the
/// dialect's root builders produce nodes in [`DocumentFormat::TopLevel`], and a
/// [`crate::Document`] can only be assembled from nodes in that context.
pub trait DocumentFormat {
    /// The context of nodes that may appear at the top level of a document of
    /// this format (content roots and prolog declarations such as a doctype).
    type TopLevel: Context;
}
