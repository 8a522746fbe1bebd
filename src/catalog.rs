//! Category filtering over a fixed, build-time catalog.
//!
//! A [`CatalogFilter`] owns a `'static` slice of items and the currently
//! selected [`Selection`]. The visible subset is always derived from the full
//! slice, so switching categories never narrows an already-filtered view.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Reserved tag meaning "no filter applied".
pub const ALL_TAG: &str = "all";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown category tag: {0}")]
    UnknownCategory(String),
}

/// A closed set of category labels.
pub trait CategoryTag: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Every category, in display order.
    const VARIANTS: &'static [Self];

    fn tag(self) -> &'static str;
    fn label(self) -> &'static str;
    fn icon(self) -> &'static str;
}

pub fn parse_tag<C: CategoryTag>(tag: &str) -> Result<C, CatalogError> {
    C::VARIANTS
        .iter()
        .copied()
        .find(|c| c.tag() == tag)
        .ok_or_else(|| CatalogError::UnknownCategory(tag.to_string()))
}

/// An item tagged with exactly one category.
pub trait Categorized {
    type Category: CategoryTag;

    fn category(&self) -> Self::Category;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<C> {
    All,
    Only(C),
}

impl<C: CategoryTag> Selection<C> {
    pub fn tag(self) -> &'static str {
        match self {
            Self::All => ALL_TAG,
            Self::Only(c) => c.tag(),
        }
    }

    pub fn matches(self, category: C) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => c == category,
        }
    }
}

impl<C: CategoryTag> FromStr for Selection<C> {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_TAG {
            Ok(Self::All)
        } else {
            parse_tag(s).map(Self::Only)
        }
    }
}

pub struct CatalogFilter<T: Categorized + 'static> {
    items: &'static [T],
    selected: Selection<T::Category>,
}

// `derive` would add a `T: Clone` bound.
impl<T: Categorized + 'static> Clone for CatalogFilter<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Categorized + 'static> Copy for CatalogFilter<T> {}

impl<T: Categorized + 'static> fmt::Debug for CatalogFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogFilter")
            .field("items", &self.items.len())
            .field("selected", &self.selected)
            .finish()
    }
}

impl<T: Categorized + 'static> CatalogFilter<T> {
    pub fn new(items: &'static [T]) -> Self {
        Self {
            items,
            selected: Selection::All,
        }
    }

    pub fn items(&self) -> &'static [T] {
        self.items
    }

    pub fn selected(&self) -> Selection<T::Category> {
        self.selected
    }

    /// Selects the category named by `tag`.
    ///
    /// Tags that are neither [`ALL_TAG`] nor a known category leave the
    /// current selection untouched.
    pub fn set_category(&mut self, tag: &str) {
        match tag.parse() {
            Ok(selection) => self.select(selection),
            Err(e) => log::debug!("ignoring category selection: {e}"),
        }
    }

    pub fn select(&mut self, selection: Selection<T::Category>) {
        self.selected = selection;
    }

    /// Items matching the current selection, in catalog order.
    pub fn visible_items(&self) -> impl Iterator<Item = &'static T> {
        let selected = self.selected;
        self.items
            .iter()
            .filter(move |item| selected.matches(item.category()))
    }

    pub fn count(&self, selection: Selection<T::Category>) -> usize {
        self.items
            .iter()
            .filter(|item| selection.matches(item.category()))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Kind {
        Saas,
        Iot,
        Sports,
    }

    impl CategoryTag for Kind {
        const VARIANTS: &'static [Self] = &[Self::Saas, Self::Iot, Self::Sports];

        fn tag(self) -> &'static str {
            match self {
                Self::Saas => "saas",
                Self::Iot => "iot",
                Self::Sports => "sports",
            }
        }

        fn label(self) -> &'static str {
            self.tag()
        }

        fn icon(self) -> &'static str {
            ""
        }
    }

    #[derive(Debug, PartialEq, Eq)]
    struct Item {
        id: u32,
        kind: Kind,
    }

    impl Categorized for Item {
        type Category = Kind;

        fn category(&self) -> Kind {
            self.kind
        }
    }

    static ITEMS: [Item; 3] = [
        Item {
            id: 1,
            kind: Kind::Saas,
        },
        Item {
            id: 2,
            kind: Kind::Iot,
        },
        Item {
            id: 3,
            kind: Kind::Saas,
        },
    ];

    fn visible_ids(filter: &CatalogFilter<Item>) -> Vec<u32> {
        filter.visible_items().map(|i| i.id).collect()
    }

    #[test]
    fn test_initial_state_shows_everything() {
        let filter = CatalogFilter::new(&ITEMS);
        assert_eq!(filter.selected(), Selection::All);
        assert_eq!(visible_ids(&filter), vec![1, 2, 3]);
    }

    #[test]
    fn test_select_category_keeps_catalog_order() {
        let mut filter = CatalogFilter::new(&ITEMS);
        filter.set_category("saas");
        assert_eq!(visible_ids(&filter), vec![1, 3]);

        filter.set_category("iot");
        assert_eq!(visible_ids(&filter), vec![2]);

        // Known category with no items in this catalog
        filter.set_category("sports");
        assert!(visible_ids(&filter).is_empty());
    }

    #[test]
    fn test_filtering_is_not_cumulative() {
        let mut filter = CatalogFilter::new(&ITEMS);
        filter.set_category("iot");
        filter.set_category("saas");
        assert_eq!(visible_ids(&filter), vec![1, 3]);
        filter.set_category(ALL_TAG);
        assert_eq!(visible_ids(&filter), vec![1, 2, 3]);
    }

    #[test]
    fn test_unknown_tag_is_ignored() {
        let mut filter = CatalogFilter::new(&ITEMS);
        filter.set_category("saas");
        filter.set_category("bogus");
        assert_eq!(filter.selected(), Selection::Only(Kind::Saas));
        assert_eq!(visible_ids(&filter), vec![1, 3]);

        // Tags are case sensitive
        filter.set_category("ALL");
        assert_eq!(visible_ids(&filter), vec![1, 3]);
        filter.set_category("");
        assert_eq!(visible_ids(&filter), vec![1, 3]);
    }

    #[test]
    fn test_set_category_is_idempotent() {
        let mut once = CatalogFilter::new(&ITEMS);
        once.set_category("saas");
        let mut twice = CatalogFilter::new(&ITEMS);
        twice.set_category("saas");
        twice.set_category("saas");
        assert_eq!(visible_ids(&once), visible_ids(&twice));
    }

    #[test]
    fn test_every_tag_yields_exactly_its_items() {
        let mut filter = CatalogFilter::new(&ITEMS);
        for kind in Kind::VARIANTS {
            filter.set_category(kind.tag());
            let expected: Vec<u32> = ITEMS
                .iter()
                .filter(|i| i.kind == *kind)
                .map(|i| i.id)
                .collect();
            assert_eq!(visible_ids(&filter), expected);
        }
    }

    #[test]
    fn test_count() {
        let filter = CatalogFilter::new(&ITEMS);
        assert_eq!(filter.count(Selection::All), 3);
        assert_eq!(filter.count(Selection::Only(Kind::Saas)), 2);
        assert_eq!(filter.count(Selection::Only(Kind::Sports)), 0);
    }

    #[test]
    fn test_selection_parsing() {
        assert_eq!("all".parse::<Selection<Kind>>(), Ok(Selection::All));
        assert_eq!(
            "iot".parse::<Selection<Kind>>(),
            Ok(Selection::Only(Kind::Iot))
        );
        assert_eq!(
            "nope".parse::<Selection<Kind>>(),
            Err(CatalogError::UnknownCategory("nope".to_string()))
        );
        assert_eq!(Selection::Only(Kind::Sports).tag(), "sports");
        assert_eq!(Selection::<Kind>::All.tag(), ALL_TAG);
    }
}
