use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

/// Heading sizes probed for the result marker, smallest first.
pub const HEADING_TAGS: [&str; 4] = ["h2", "h3", "h4", "h5"];

const E: &str = "Invalid selector";
lazy_static! {
    static ref HEADINGS: Vec<(&'static str, Selector)> = HEADING_TAGS
        .iter()
        .map(|tag| (*tag, Selector::parse(tag).expect(E)))
        .collect();
}

/// The heading tag repeated most often in a document, with every occurrence
/// of it in document order. `tag` is empty when no heading repeats.
#[derive(Debug)]
pub struct Markers<'a> {
    pub tag: &'static str,
    pub elements: Vec<ElementRef<'a>>,
}

impl Markers<'_> {
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Picks the marker tag. A heading has to appear at least twice to qualify
/// and ties go to the smaller heading size.
pub fn find_markers(doc: &Html) -> Markers<'_> {
    let mut repetition = 1;
    let mut best = None;
    for heading in HEADINGS.iter() {
        let count = doc.select(&heading.1).count();
        if count > repetition {
            repetition = count;
            best = Some(heading);
        }
    }

    match best {
        Some((tag, selector)) => {
            let elements: Vec<_> = doc.select(selector).collect();
            debug!("Marker tag <{}> repeated {} times", tag, elements.len());
            Markers {
                tag: *tag,
                elements,
            }
        }
        None => {
            debug!("No repeating heading tag found");
            Markers {
                tag: "",
                elements: vec![],
            }
        }
    }
}

/// Pairs up consecutive markers and records the common ancestor of every
/// pair twice, once per marker. An odd trailing marker is paired with the
/// one before it. Duplicates are kept.
pub fn resolve_cards<'a>(markers: &[ElementRef<'a>]) -> Vec<ElementRef<'a>> {
    let mut cards = Vec::with_capacity(markers.len() + 1);
    let mut i = 0;
    while i < markers.len() {
        let (first, second) = if i + 1 < markers.len() {
            (markers[i], markers[i + 1])
        } else if i > 0 {
            (markers[i - 1], markers[i])
        } else {
            break;
        };
        i += 2;

        match common_ancestor(first, second) {
            Some(card) => {
                cards.push(card);
                cards.push(card);
            }
            None => warn!("Marker pair shares no ancestor at equal height, skipped"),
        }
    }
    debug!("Resolved {} cards from {} markers", cards.len(), markers.len());
    cards
}

/// Climbs from both elements one parent at a time until they meet.
/// Elements at different depths never meet and yield `None`.
pub fn common_ancestor<'a>(a: ElementRef<'a>, b: ElementRef<'a>) -> Option<ElementRef<'a>> {
    let (mut a, mut b) = (*a, *b);
    loop {
        a = a.parent()?;
        b = b.parent()?;
        if a.id() == b.id() {
            return ElementRef::wrap(a);
        }
    }
}
