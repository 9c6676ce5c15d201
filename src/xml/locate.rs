use std::borrow::Cow;

use tracing::trace;

use super::tree::{Document, Element, Elements};

/// One way of matching a logical name against an element.
///
/// Strategies are tried in [`MatchStrategy::ORDER`]; the first that matches
/// anything in the search scope wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Local name equals the logical name, prefix ignored.
    Canonical,
    /// Local name equals the logical name with its first letter lowercased.
    LowerFirst,
    /// Local name equals the logical name under any namespace URI. Final
    /// tier; never finds more than `Canonical` on the same scope.
    AnyNamespace,
}

impl MatchStrategy {
    /// Priority order.
    pub const ORDER: [MatchStrategy; 3] = [
        MatchStrategy::Canonical,
        MatchStrategy::LowerFirst,
        MatchStrategy::AnyNamespace,
    ];

    /// Whether `element` answers to `logical` under this strategy.
    pub fn matches(self, element: &Element<'_>, logical: &str) -> bool {
        match self {
            Self::Canonical | Self::AnyNamespace => element.local_name() == logical,
            Self::LowerFirst => element.local_name() == lower_first(logical),
        }
    }
}

/// Where a lookup searches.
///
/// A [`Document`] includes its document element; an [`Element`] searches
/// only its descendants.
pub trait Scope<'a> {
    fn candidates(&self) -> Elements<'a>;
}

impl<'a> Scope<'a> for &'a Document {
    fn candidates(&self) -> Elements<'a> {
        self.elements()
    }
}

impl<'a> Scope<'a> for Element<'a> {
    fn candidates(&self) -> Elements<'a> {
        self.descendants()
    }
}

/// First element answering to `logical`, see [`find_all_elements`].
pub fn find_element<'a>(scope: impl Scope<'a>, logical: &str) -> Option<Element<'a>> {
    for strategy in MatchStrategy::ORDER {
        if let Some(found) = scope
            .candidates()
            .find(|e| strategy.matches(e, logical))
        {
            trace!(logical, ?strategy, name = found.name(), "resolved element");
            return Some(found);
        }
    }
    None
}

/// All elements answering to `logical`, in document order, from the first
/// strategy that matches at least one.
pub fn find_all_elements<'a>(scope: impl Scope<'a>, logical: &str) -> Vec<Element<'a>> {
    for strategy in MatchStrategy::ORDER {
        let found: Vec<_> = scope
            .candidates()
            .filter(|e| strategy.matches(e, logical))
            .collect();
        if !found.is_empty() {
            trace!(logical, ?strategy, count = found.len(), "resolved elements");
            return found;
        }
    }
    Vec::new()
}

/// Read an attribute by its canonical PascalCase name, falling back to the
/// initial-lowercase spelling. Empty values count as absent.
///
/// All-caps names (`UUID`) also try the fully lowercase form.
pub fn get_attribute<'a>(element: &Element<'a>, logical: &str) -> Option<&'a str> {
    let mut candidates = vec![Cow::Borrowed(logical), lower_first(logical)];
    if logical.len() > 1 && !logical.chars().any(char::is_lowercase) {
        candidates.push(Cow::Owned(logical.to_lowercase()));
    }
    candidates
        .iter()
        .find_map(|name| element.attribute(name).filter(|v| !v.is_empty()))
}

/// [`get_attribute`] as an owned string, or `default` when absent.
pub fn attribute_or(element: &Element<'_>, logical: &str, default: &str) -> String {
    get_attribute(element, logical).unwrap_or(default).to_string()
}

/// [`get_attribute`] as an owned optional string.
pub fn attribute_opt(element: &Element<'_>, logical: &str) -> Option<String> {
    get_attribute(element, logical).map(str::to_string)
}

/// `"Comprobante"` → `"comprobante"`.
pub fn lower_first(name: &str) -> Cow<'_, str> {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => {
            Cow::Owned(first.to_lowercase().chain(chars).collect())
        }
        _ => Cow::Borrowed(name),
    }
}
