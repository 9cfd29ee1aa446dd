//! Category index and style filtering.
//!
//! Categories are the distinct non-empty style groups. The category selector
//! lists them sorted behind the `"all"` pseudo-category, while the grouped
//! style listing keeps the catalog's own order of first encounter.

use std::collections::BTreeSet;

use crate::catalog::Style;
use crate::selection::NO_STYLE_ID;

/// Pseudo-category matching every style
pub const ALL_CATEGORIES: &str = "all";

/// Bucket label for styles without a group in the grouped listing
pub const OTHER_GROUP: &str = "Other";

/// Sorted distinct non-empty groups present in `styles`.
pub fn categories_of(styles: &[Style]) -> Vec<String> {
    styles
        .iter()
        .filter_map(Style::group)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Values offered by the category selector: `"all"` first, then [`categories_of`].
pub fn category_options(styles: &[Style]) -> Vec<String> {
    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(categories_of(styles))
        .collect()
}

/// Whether `category` is `"all"` or one of the groups in `styles`.
pub fn is_known_category(styles: &[Style], category: &str) -> bool {
    category == ALL_CATEGORIES || styles.iter().any(|s| s.group() == Some(category))
}

/// A run of styles sharing one group label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleGroup<'a> {
    pub label: &'a str,
    pub styles: Vec<&'a Style>,
}

/// Styles visible under a category filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleListing<'a> {
    /// Every style, partitioned by group (filter `"all"`)
    Grouped(Vec<StyleGroup<'a>>),
    /// Styles of a single category, in catalog order
    Flat(Vec<&'a Style>),
}

impl<'a> StyleListing<'a> {
    /// All listed styles in display order.
    pub fn styles(&self) -> Vec<&'a Style> {
        match self {
            StyleListing::Grouped(groups) => groups
                .iter()
                .flat_map(|g| g.styles.iter().copied())
                .collect(),
            StyleListing::Flat(styles) => styles.clone(),
        }
    }

    pub fn contains(&self, style_id: &str) -> bool {
        self.styles().iter().any(|s| s.id == style_id)
    }

    pub fn is_empty(&self) -> bool {
        match self {
            StyleListing::Grouped(groups) => groups.is_empty(),
            StyleListing::Flat(styles) => styles.is_empty(),
        }
    }
}

/// Styles visible under `category`.
///
/// The catalog's `"none"` entry is never listed; the form pins its own
/// "no style" option above the list instead.
pub fn filter_styles<'a>(styles: &'a [Style], category: &str) -> StyleListing<'a> {
    let listable = styles.iter().filter(|s| s.id != NO_STYLE_ID);

    if category != ALL_CATEGORIES {
        return StyleListing::Flat(listable.filter(|s| s.group() == Some(category)).collect());
    }

    let mut groups: Vec<StyleGroup<'a>> = Vec::new();
    for style in listable {
        let label = style.group().unwrap_or(OTHER_GROUP);
        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.styles.push(style),
            None => groups.push(StyleGroup {
                label,
                styles: vec![style],
            }),
        }
    }
    StyleListing::Grouped(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styles() -> Vec<Style> {
        vec![
            Style::new("none", "None"),
            Style::new("watercolor", "Watercolor").with_group("Painting"),
            Style::new("cyberpunk", "Cyberpunk").with_group("Digital"),
            Style::new("plain", "Plain"),
            Style::new("oil_painting", "Oil Painting").with_group("Painting"),
            Style::new("3d_render", "3D Render").with_group("Digital"),
        ]
    }

    fn ids(listed: &[&Style]) -> Vec<String> {
        listed.iter().map(|s| s.id.clone()).collect()
    }

    #[test]
    fn test_categories_sorted_and_distinct() {
        assert_eq!(categories_of(&styles()), vec!["Digital", "Painting"]);
    }

    #[test]
    fn test_categories_independent_of_order() {
        let mut reversed = styles();
        reversed.reverse();
        assert_eq!(categories_of(&reversed), categories_of(&styles()));
    }

    #[test]
    fn test_categories_skip_empty_groups() {
        let styles = vec![
            Style::new("a", "A").with_group(""),
            Style::new("b", "B").with_group("Zen"),
            Style::new("c", "C").with_group("Art"),
        ];
        assert_eq!(category_options(&styles), vec!["all", "Art", "Zen"]);
        assert_eq!(category_options(&[]), vec!["all"]);
    }

    #[test]
    fn test_known_category() {
        assert!(is_known_category(&styles(), "all"));
        assert!(is_known_category(&styles(), "Digital"));
        assert!(!is_known_category(&styles(), "Other"));
    }

    #[test]
    fn test_flat_filter_keeps_catalog_order() {
        let styles = styles();
        let listing = filter_styles(&styles, "Painting");
        let StyleListing::Flat(listed) = listing else {
            panic!("expected a flat listing");
        };
        assert_eq!(ids(&listed), vec!["watercolor", "oil_painting"]);
    }

    #[test]
    fn test_flat_filter_excludes_none() {
        let styles = vec![
            Style::new("none", "None").with_group("Art"),
            Style::new("s1", "Sketch").with_group("Art"),
        ];
        assert_eq!(ids(&filter_styles(&styles, "Art").styles()), vec!["s1"]);
    }

    #[test]
    fn test_all_groups_by_first_encounter() {
        let styles = styles();
        let StyleListing::Grouped(groups) = filter_styles(&styles, ALL_CATEGORIES) else {
            panic!("expected a grouped listing");
        };
        let labels: Vec<&str> = groups.iter().map(|g| g.label).collect();
        assert_eq!(labels, vec!["Painting", "Digital", "Other"]);
        assert_eq!(ids(&groups[0].styles), vec!["watercolor", "oil_painting"]);
        assert_eq!(ids(&groups[2].styles), vec!["plain"]);
    }

    #[test]
    fn test_all_lists_everything_but_none() {
        let styles = styles();
        let listing = filter_styles(&styles, ALL_CATEGORIES);
        assert_eq!(listing.styles().len(), styles.len() - 1);
        assert!(!listing.contains("none"));
        assert!(listing.contains("plain"));
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let styles = styles();
        assert!(filter_styles(&styles, "Sculpture").is_empty());
    }
}
