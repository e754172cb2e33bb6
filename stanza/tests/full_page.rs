//! End-to-end rendering of a page assembled with combinators.

use stanza::bumpalo::Bump;
use stanza::{attr, html, Indentation, Node};

fn tag_page<'bump>(
    bump: &'bump Bump,
    tags: &[&str],
    show_footer: bool,
) -> stanza::Document<'bump, html::Html> {
    html::document_with_doctype(
        bump,
        html::html(bump, [])([
            html::head(bump, [])([
                html::title(bump, "Tags"),
                html::meta(bump, [attr(bump, ("charset", "utf-8"))]),
            ]),
            html::body(bump, [])([
                html::h1(bump, [html::id(bump, "top")])("Tags"),
                html::ul(bump, [html::class(bump, "tags")])(Node::for_each(
                    bump,
                    tags.iter().copied(),
                    |tag| html::li(bump, [])(html::a(bump, [html::href(bump, "/tags")])(tag)),
                )),
                Node::when(show_footer, html::footer(bump, [])("fin")),
            ]),
        ]),
    )
}

#[test]
fn pretty_rendering_of_a_full_page() {
    let bump = Bump::new();
    let page = tag_page(&bump, &["rust", "markup"], true);
    assert_eq!(
        page.render(Indentation::Spaces(2)),
        "<!DOCTYPE html>\n\
         <html>\n\
         \x20 <head>\n\
         \x20   <title>Tags</title>\n\
         \x20   <meta charset=\"utf-8\"/>\n\
         \x20 </head>\n\
         \x20 <body>\n\
         \x20   <h1 id=\"top\">Tags</h1>\n\
         \x20   <ul class=\"tags\">\n\
         \x20     <li>\n\
         \x20       <a href=\"/tags\">rust</a>\n\
         \x20     </li>\n\
         \x20     <li>\n\
         \x20       <a href=\"/tags\">markup</a>\n\
         \x20     </li>\n\
         \x20   </ul>\n\
         \x20   <footer>fin</footer>\n\
         \x20 </body>\n\
         </html>"
    );
}

#[test]
fn compact_rendering_of_a_full_page() {
    let bump = Bump::new();
    let page = tag_page(&bump, &["rust"], false);
    assert_eq!(
        page.render(Indentation::None),
        "<!DOCTYPE html><html><head><title>Tags</title><meta charset=\"utf-8\"/></head>\
         <body><h1 id=\"top\">Tags</h1><ul class=\"tags\">\
         <li><a href=\"/tags\">rust</a></li></ul></body></html>"
    );
}

#[test]
fn rendering_the_same_document_twice_is_byte_identical() {
    let bump = Bump::new();
    let page = tag_page(&bump, &["a", "b", "c"], true);
    assert_eq!(
        page.render(Indentation::Spaces(2)),
        page.render(Indentation::Spaces(2))
    );
    assert_eq!(page.render(Indentation::None), page.render(Indentation::None));
}
