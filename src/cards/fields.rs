use crate::utils;
use lazy_regex::regex;
use lazy_static::lazy_static;
use reqwest::Url;
use scraper::ElementRef;

const ANCHOR: &str = "a";

lazy_static! {
    // Relative hrefs are resolved against this only to read their query string.
    static ref HREF_BASE: Url = Url::parse("http://localhost/").expect("Invalid base url");
}

/// Text of the first `marker_tag` element inside the card.
pub fn title(card: ElementRef<'_>, marker_tag: &str) -> String {
    utils::descendants_named(card, marker_tag)
        .next()
        .map(utils::text_content)
        .unwrap_or_default()
}

/// Destination of the card's last anchor. Hrefs not starting with `http`
/// are treated as redirects carrying the destination in their `q` parameter.
pub fn link(card: ElementRef<'_>) -> String {
    let href = utils::descendants_named(card, ANCHOR)
        .last()
        .and_then(|a| a.value().attr("href"))
        .unwrap_or_default();

    if href.starts_with("http") {
        href.to_string()
    } else {
        redirect_target(href).unwrap_or_default()
    }
}

fn redirect_target(href: &str) -> Option<String> {
    let url = HREF_BASE.join(href).ok()?;
    url.query_pairs()
        .filter(|(key, _)| key == "q")
        .last()
        .map(|(_, value)| value.into_owned())
}

/// Card text with every anchor left out.
pub fn description(card: ElementRef<'_>) -> String {
    utils::text_content_excluding(card, ANCHOR)
}

pub fn is_promoted(card: ElementRef<'_>) -> bool {
    regex!(r"Ad·http").is_match(&utils::text_content(card))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scraper::{Html, Selector};

    fn card(doc: &Html) -> ElementRef<'_> {
        doc.select(&Selector::parse("div.card").expect("Invalid selector"))
            .next()
            .expect("Missing card")
    }

    #[test]
    fn test_title_is_first_marker() {
        let doc = Html::parse_fragment(
            r#"<div class="card"><h3>First <b>title</b></h3><h3>Second</h3></div>"#,
        );
        assert_eq!(title(card(&doc), "h3"), "First title");
        assert_eq!(title(card(&doc), "h4"), "");
        assert_eq!(title(card(&doc), ""), "");
    }

    #[test]
    fn test_redirect_link_is_unwrapped() {
        let doc = Html::parse_fragment(
            r#"<div class="card"><a href="/url?q=https://example.com&sa=U&ved=2ah"><h3>t</h3></a></div>"#,
        );
        assert_eq!(link(card(&doc)), "https://example.com");
    }

    #[test]
    fn test_encoded_redirect_link_is_decoded() {
        let doc = Html::parse_fragment(
            r#"<div class="card"><a href="/url?sa=t&q=https%3A%2F%2Fexample.com%2Fa%3Fb%3D1"></a></div>"#,
        );
        assert_eq!(link(card(&doc)), "https://example.com/a?b=1");
    }

    #[test]
    fn test_absolute_link_is_kept() {
        let doc = Html::parse_fragment(
            r#"<div class="card"><a href="https://rust-lang.org/learn?q=ignored">x</a></div>"#,
        );
        assert_eq!(link(card(&doc)), "https://rust-lang.org/learn?q=ignored");
    }

    #[test]
    fn test_last_anchor_wins() {
        let doc = Html::parse_fragment(
            r#"<div class="card"><a href="https://first.example">1</a><span><a href="https://last.example">2</a></span></div>"#,
        );
        assert_eq!(link(card(&doc)), "https://last.example");

        let doc = Html::parse_fragment(
            r#"<div class="card"><a href="https://first.example">1</a><a name="anchor">2</a></div>"#,
        );
        assert_eq!(link(card(&doc)), "");
    }

    #[test]
    fn test_unresolvable_links_are_empty() {
        let doc = Html::parse_fragment(r#"<div class="card"><a href="/search?tbm=isch">x</a></div>"#);
        assert_eq!(link(card(&doc)), "");

        let doc = Html::parse_fragment(r#"<div class="card"><p>no anchor</p></div>"#);
        assert_eq!(link(card(&doc)), "");
    }

    #[test]
    fn test_description_drops_anchor_text() {
        let doc = Html::parse_fragment(
            r#"<div class="card"><a href="https://x.example"><h3>Title</h3></a><div>Some <em>useful</em> text</div></div>"#,
        );
        assert_eq!(description(card(&doc)), "Some useful text");
        assert_eq!(title(card(&doc), "h3"), "Title");
    }

    #[test]
    fn test_promoted_marker() {
        let doc = Html::parse_fragment(
            r#"<div class="card"><span>Ad</span><span>·</span><span>http://sponsor.example</span></div>"#,
        );
        assert!(is_promoted(card(&doc)));

        let doc = Html::parse_fragment(r#"<div class="card">Ad·http://sponsor.example</div>"#);
        assert!(is_promoted(card(&doc)));

        let doc = Html::parse_fragment(r#"<div class="card">Visit http://sponsor.example</div>"#);
        assert!(!is_promoted(card(&doc)));
    }
}
