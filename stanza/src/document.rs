use std::marker::PhantomData;

use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::node::{flatten_into, NodeKind};
use crate::render::render_siblings;
use crate::{DocumentFormat, Indentation, Node};

/// A complete document of one format: an ordered sequence of top-level nodes.
///
/// A document is created once from nodes in the format's top-level context and
/// is immutable thereafter; rendering never mutates it, so the same document
/// may be rendered any number of times from independent call sites.
pub struct Document<'bump, F> {
    pub(crate) nodes: BumpVec<'bump, NodeKind<'bump>>,
    marker: PhantomData<F>,
}

impl<F> std::fmt::Debug for Document<'_, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document").field("nodes", &self.nodes).finish()
    }
}

#[cfg(feature = "serde")]
impl<F> serde::Serialize for Document<'_, F> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.nodes.serialize(serializer)
    }
}

impl<'bump, F: DocumentFormat> Document<'bump, F> {
    /// Create a new document from top-level nodes of this format.
    ///
    /// Groups are spliced and empties dropped here, so the stored sequence
    /// contains only renderable nodes.
    pub fn new(
        bump: &'bump Bump,
        nodes: impl IntoIterator<Item = Node<'bump, F::TopLevel>>,
    ) -> Self {
        let mut flattened = BumpVec::new_in(bump);
        for node in nodes {
            flatten_into(&mut flattened, node.kind);
        }
        Document {
            nodes: flattened,
            marker: PhantomData,
        }
    }

    /// Render the document to a string.
    ///
    /// Top-level nodes sit at depth zero; in pretty modes each one starts on
    /// its own line with no indentation, which places a leading declaration
    /// (doctype, XML prolog) on its own unindented line before the root.
    pub fn render(&self, indentation: Indentation) -> String {
        let mut out = String::new();
        render_siblings(&mut out, self.nodes.as_slice(), indentation, 0);
        out
    }

    /// Write the rendered document to a writer.
    pub fn write(
        &self,
        writer: &mut impl std::io::Write,
        indentation: Indentation,
    ) -> std::io::Result<()> {
        writer.write_all(self.render(indentation).as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::{body, code, document, document_with_doctype, html, p, ul};
    use crate::attr;

    #[test]
    fn inline_code_in_a_paragraph() {
        let bump = Bump::new();
        let input = document(
            &bump,
            [html(&bump, [])(body(&bump, [])(p(&bump, [])([
                Node::text(&bump, "This is an example of "),
                code(&bump, [])("inline code"),
                Node::text(&bump, " in a paragraph."),
            ])))],
        );
        assert_eq!(
            input.render(Indentation::None),
            "<html><body><p>This is an example of <code>inline code</code> in a paragraph.</p></body></html>"
        );
    }

    #[test]
    fn empty_ul_with_tags_class() {
        let bump = Bump::new();
        let list = ul(&bump, [attr(&bump, ("class", "tags"))])([]);
        assert_eq!(
            list.render(Indentation::None),
            "<ul class=\"tags\"></ul>"
        );
    }

    #[test]
    fn doctype_abuts_root_in_compact_mode() {
        let bump = Bump::new();
        let page = document_with_doctype(
            &bump,
            html(&bump, [])(body(&bump, [])("Hello")),
        );
        assert_eq!(
            page.render(Indentation::None),
            "<!DOCTYPE html><html><body>Hello</body></html>"
        );
    }

    #[test]
    fn doctype_gets_its_own_line_in_pretty_mode() {
        let bump = Bump::new();
        let page = document_with_doctype(
            &bump,
            html(&bump, [])(body(&bump, [])("Hello")),
        );
        assert_eq!(
            page.render(Indentation::Spaces(2)),
            "<!DOCTYPE html>\n<html>\n  <body>Hello</body>\n</html>"
        );
    }

    #[test]
    fn write_matches_render() {
        let bump = Bump::new();
        let page = document(&bump, [html(&bump, [])(body(&bump, [])("x"))]);
        let mut sink = Vec::new();
        page.write(&mut sink, Indentation::Spaces(2)).unwrap();
        assert_eq!(
            String::from_utf8(sink).unwrap(),
            page.render(Indentation::Spaces(2))
        );
    }
}
