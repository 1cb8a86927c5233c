use scraper::{ElementRef, Node};

/// Elements strictly below `el` whose tag name is `name`, in document order.
pub(crate) fn descendants_named<'a>(
    el: ElementRef<'a>,
    name: &'a str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(move |e| e.value().name() == name)
}

pub(crate) fn text_content(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Text content of `el` as if every descendant element named `excluded`
/// had been removed from the tree beforehand.
pub(crate) fn text_content_excluding(el: ElementRef<'_>, excluded: &str) -> String {
    let mut out = String::new();
    push_text(el, excluded, &mut out);
    out
}

fn push_text(el: ElementRef<'_>, excluded: &str, out: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) if element.name() == excluded => {}
            _ => {
                if let Some(child) = ElementRef::wrap(child) {
                    push_text(child, excluded, out);
                }
            }
        }
    }
}
