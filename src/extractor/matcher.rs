//! Structural predicates over a parsed document.
//!
//! A [`Matcher`] describes where a fragment lives in the node tree rather than
//! how to reach it with a CSS selector. Sibling relationships count every node
//! (including whitespace-only text), which selectors cannot express.

use scraper::{ElementRef, Html};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// Element whose `id` attribute equals the value.
    Id(&'static str),
    /// Element whose class list contains the token.
    Class(&'static str),
    /// Element whose whole `class` attribute equals the value.
    ClassAttr(&'static str),
    /// Element with the given tag name.
    Tag(&'static str),
    /// Element whose parent element satisfies the inner matcher.
    Parent(Box<Matcher>),
    /// Element whose `distance`-th previous sibling node has exactly this text.
    PrecededBy {
        distance: usize,
        text: &'static str,
    },
    /// Element satisfying every inner matcher.
    All(Vec<Matcher>),
}

impl Matcher {
    pub fn parent(inner: Matcher) -> Self {
        Self::Parent(Box::new(inner))
    }

    pub fn matches(&self, element: ElementRef<'_>) -> bool {
        match self {
            Self::Id(id) => element.value().id() == Some(*id),
            Self::Class(token) => element.value().classes().any(|class| class == *token),
            Self::ClassAttr(value) => element.value().attr("class") == Some(*value),
            Self::Tag(name) => element.value().name() == *name,
            Self::Parent(inner) => element
                .parent()
                .and_then(ElementRef::wrap)
                .is_some_and(|parent| inner.matches(parent)),
            Self::PrecededBy { distance, text } => {
                if *distance == 0 {
                    return false;
                }
                let mut sibling = element.prev_sibling();
                for _ in 1..*distance {
                    sibling = sibling.and_then(|node| node.prev_sibling());
                }
                sibling.is_some_and(|node| {
                    join_text(
                        node.descendants()
                            .filter_map(|n| n.value().as_text())
                            .map(|t| &**t),
                    ) == *text
                })
            }
            Self::All(matchers) => matchers.iter().all(|m| m.matches(element)),
        }
    }
}

/// First element in document order satisfying `matcher`.
pub fn find<'a>(document: &'a Html, matcher: &Matcher) -> Option<ElementRef<'a>> {
    elements(document).find(|element| matcher.matches(*element))
}

/// Every element satisfying `matcher`, in document order. The subtree of a
/// matched element is not searched further.
pub fn find_all<'a>(document: &'a Html, matcher: &Matcher) -> Vec<ElementRef<'a>> {
    let mut found = Vec::new();
    let mut pending = vec![document.root_element()];

    while let Some(element) = pending.pop() {
        if matcher.matches(element) {
            found.push(element);
            continue;
        }
        pending.extend(element.children().rev().filter_map(ElementRef::wrap));
    }

    found
}

fn elements(document: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    document.tree.root().descendants().filter_map(ElementRef::wrap)
}

/// Visible text of an element: each descendant text node trimmed, blanks
/// dropped, the rest joined by single spaces.
pub fn text(element: ElementRef<'_>) -> String {
    join_text(element.text())
}

pub(crate) fn join_text<'a>(pieces: impl Iterator<Item = &'a str>) -> String {
    pieces
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn attr<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}
