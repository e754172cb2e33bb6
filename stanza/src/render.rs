//! Deterministic serialization of node trees.
//!
//! Rendering is a pure depth-first walk: it never fails, never mutates its
//! input, and produces byte-identical output for identical input, since
//! attributes and children are ordered sequences throughout.

use crate::attribute::{AttributeEntry, AttributeValue};
use crate::node::NodeKind;

/// How much whitespace to insert at structural boundaries when rendering.
///
/// Indentation only ever adds whitespace between sibling/child boundaries; it
/// never alters content. [`Indentation::None`] produces compact output with no
/// inserted whitespace at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indentation {
    /// Compact output; no whitespace is inserted.
    #[default]
    None,
    /// Pretty output indented with the given number of spaces per level.
    Spaces(usize),
    /// Pretty output indented with the given number of tabs per level.
    Tabs(usize),
}

impl Indentation {
    /// In pretty modes, push a newline followed by `depth` indent units.
    /// Does nothing in compact mode.
    fn push_break(&self, out: &mut String, depth: usize) {
        let (unit, count) = match self {
            Indentation::None => return,
            Indentation::Spaces(n) => (' ', *n),
            Indentation::Tabs(n) => ('\t', *n),
        };
        out.push('\n');
        for _ in 0..depth * count {
            out.push(unit);
        }
    }
}

pub(crate) fn render_node(
    out: &mut String,
    node: &NodeKind<'_>,
    indentation: Indentation,
    depth: usize,
) {
    match node {
        NodeKind::Element {
            name,
            attributes,
            children,
        } => {
            out.push('<');
            out.push_str(name.as_str());
            render_attributes(out, attributes.as_slice());
            out.push('>');
            // A child list is structured when it holds anything beyond plain
            // text or raw markup. Only structured lists get line breaks, so
            // text-only content such as `<p>Hello</p>` stays on one line.
            let structured = children.iter().any(|child| {
                !matches!(child, NodeKind::Text { .. } | NodeKind::Raw { .. })
            });
            for child in children.iter() {
                if structured {
                    indentation.push_break(out, depth + 1);
                }
                render_node(out, child, indentation, depth + 1);
            }
            if structured {
                indentation.push_break(out, depth);
            }
            out.push_str("</");
            out.push_str(name.as_str());
            out.push('>');
        }
        NodeKind::SelfClosing { name, attributes } => {
            out.push('<');
            out.push_str(name.as_str());
            render_attributes(out, attributes.as_slice());
            out.push_str("/>");
        }
        NodeKind::Text { text } => {
            out.push_str(&html_escape::encode_text(text.as_str()));
        }
        NodeKind::Raw { markup } | NodeKind::Declaration { markup } => {
            out.push_str(markup.as_str());
        }
        NodeKind::Comment { text } => {
            out.push_str("<!--");
            out.push_str(text.as_str());
            out.push_str("-->");
        }
        NodeKind::Group { children } => {
            render_siblings(out, children.as_slice(), indentation, depth);
        }
        NodeKind::Empty => {}
    }
}

/// Render nodes that sit next to each other at the same depth, separating
/// them with a line break in pretty modes. Used for group members and for a
/// document's top-level nodes, where a leading declaration ends up on its own
/// unindented line.
pub(crate) fn render_siblings(
    out: &mut String,
    nodes: &[NodeKind<'_>],
    indentation: Indentation,
    depth: usize,
) {
    for (index, node) in nodes.iter().enumerate() {
        if index > 0 {
            indentation.push_break(out, depth);
        }
        render_node(out, node, indentation, depth);
    }
}

/// Emit attributes in append order, resolving duplicate keys last-write-wins:
/// an entry is skipped when a later entry on the same element shares its key.
fn render_attributes(out: &mut String, attributes: &[AttributeEntry<'_>]) {
    for (index, attribute) in attributes.iter().enumerate() {
        let overridden = attributes[index + 1..]
            .iter()
            .any(|later| later.key == attribute.key);
        if overridden {
            continue;
        }
        out.push(' ');
        out.push_str(attribute.key.as_str());
        if let Some(value) = &attribute.value {
            out.push_str("=\"");
            match value {
                AttributeValue::String(s) => {
                    out.push_str(&html_escape::encode_quoted_attribute(s.as_str()));
                }
                AttributeValue::Int(i) => out.push_str(&i.to_string()),
                AttributeValue::Float(f) => out.push_str(&f.to_string()),
                AttributeValue::Bool(b) => out.push_str(&b.to_string()),
            }
            out.push('"');
        }
    }
}

#[cfg(test)]
mod tests {
    use bumpalo::Bump;

    use crate::html::{a, div, href, img, src, BodyContext};
    use crate::{attr, Indentation, Node};

    #[test]
    fn text_is_escaped_and_raw_is_not() {
        let bump = Bump::new();
        let text = Node::<BodyContext>::text(&bump, "<b>&");
        assert_eq!(text.render(Indentation::None), "&lt;b&gt;&amp;");

        let raw = Node::<BodyContext>::raw(&bump, "<b>");
        assert_eq!(raw.render(Indentation::None), "<b>");
    }

    #[test]
    fn attribute_values_are_escaped() {
        let bump = Bump::new();
        let link = a(&bump, [href(&bump, "/?a=1&b=2")])("here");
        assert_eq!(
            link.render(Indentation::None),
            "<a href=\"/?a=1&amp;b=2\">here</a>"
        );
    }

    #[test]
    fn duplicate_attribute_keys_are_last_write_wins() {
        let bump = Bump::new();
        let node = div(
            &bump,
            [
                attr(&bump, ("class", "first")),
                attr(&bump, ("id", "keep")),
                attr(&bump, ("class", "second")),
            ],
        )(Node::empty());
        assert_eq!(
            node.render(Indentation::None),
            "<div id=\"keep\" class=\"second\"></div>"
        );
    }

    #[test]
    fn boolean_attribute_renders_bare() {
        let bump = Bump::new();
        let node = div(&bump, [attr(&bump, "hidden")])(Node::empty());
        assert_eq!(node.render(Indentation::None), "<div hidden></div>");
    }

    #[test]
    fn self_closing_element() {
        let bump = Bump::new();
        let image = img(&bump, [src(&bump, "cat.png")]);
        assert_eq!(image.render(Indentation::None), "<img src=\"cat.png\"/>");
    }

    #[test]
    fn comment_syntax() {
        let bump = Bump::new();
        let comment = Node::<BodyContext>::comment(&bump, " generated ");
        assert_eq!(comment.render(Indentation::None), "<!-- generated -->");
    }

    #[test]
    fn compact_versus_pretty_two_level_tree() {
        let bump = Bump::new();
        let tree = crate::xml::element(&bump, "a", [])(crate::xml::element(&bump, "b", [])(
            Node::empty(),
        ));
        assert_eq!(tree.render(Indentation::None), "<a><b></b></a>");
        assert_eq!(tree.render(Indentation::Spaces(2)), "<a>\n  <b></b>\n</a>");
        assert_eq!(tree.render(Indentation::Tabs(1)), "<a>\n\t<b></b>\n</a>");
    }

    #[test]
    fn text_only_content_stays_inline_in_pretty_mode() {
        let bump = Bump::new();
        let node = div(&bump, [])("hi");
        assert_eq!(node.render(Indentation::Spaces(2)), "<div>hi</div>");
    }

    #[test]
    fn text_sibling_of_an_element_gets_its_own_line() {
        let bump = Bump::new();
        let node = div(&bump, [])([
            crate::html::p(&bump, [])("x"),
            Node::text(&bump, "hi"),
        ]);
        assert_eq!(
            node.render(Indentation::Spaces(2)),
            "<div>\n  <p>x</p>\n  hi\n</div>"
        );
    }

    #[test]
    fn embedded_declaration_is_indented_like_any_child() {
        let bump = Bump::new();
        let node = crate::xml::element(&bump, "a", [])(Node::declaration(
            &bump,
            "<?dialect hint?>",
        ));
        assert_eq!(
            node.render(Indentation::Spaces(2)),
            "<a>\n  <?dialect hint?>\n</a>"
        );
    }

    #[test]
    fn group_and_empty_render_to_nothing_of_their_own() {
        let bump = Bump::new();
        assert_eq!(
            Node::<BodyContext>::empty().render(Indentation::Spaces(2)),
            ""
        );
        assert_eq!(
            Node::<BodyContext>::group(&bump, []).render(Indentation::None),
            ""
        );
        let grouped = Node::<BodyContext>::group(&bump, [Node::text(&bump, "x")]);
        assert_eq!(
            grouped.render(Indentation::None),
            Node::<BodyContext>::text(&bump, "x").render(Indentation::None)
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let bump = Bump::new();
        let node = div(&bump, [attr(&bump, ("class", "tags"))])([
            Node::text(&bump, "a"),
            Node::comment(&bump, "b"),
            Node::text(&bump, "c"),
        ]);
        let first = node.render(Indentation::Spaces(4));
        let second = node.render(Indentation::Spaces(4));
        assert_eq!(first, second);
    }
}
