//! Option lists for the model, category and style selectors.
//!
//! These are straight projections of the catalog and the current selection;
//! hosts render them as `<select>`/dropdown entries.

use canvas_data::{
    category_options, filter_styles, Model, Style, StyleListing, ALL_CATEGORIES, CUSTOM_STYLE_ID,
    NO_STYLE_ID,
};

pub const ALL_CATEGORIES_LABEL: &str = "All Categories";
pub const NO_STYLE_LABEL: &str = "No Style (Default)";
pub const CUSTOM_STYLE_LABEL: &str = "Custom Style...";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>, selected: bool) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected,
        }
    }
}

/// One entry of the style selector: a plain option or a labelled group
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StyleEntry {
    Option(SelectOption),
    Group {
        label: String,
        options: Vec<SelectOption>,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleOptions {
    pub entries: Vec<StyleEntry>,
}

impl StyleOptions {
    /// Every option in display order, groups flattened
    pub fn options(&self) -> Vec<&SelectOption> {
        self.entries
            .iter()
            .flat_map(|entry| match entry {
                StyleEntry::Option(option) => vec![option],
                StyleEntry::Group { options, .. } => options.iter().collect(),
            })
            .collect()
    }

    pub fn values(&self) -> Vec<&str> {
        self.options().into_iter().map(|o| o.value.as_str()).collect()
    }

    pub fn group_labels(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                StyleEntry::Group { label, .. } => Some(label.as_str()),
                StyleEntry::Option(_) => None,
            })
            .collect()
    }

    pub fn selected_value(&self) -> Option<&str> {
        self.options()
            .into_iter()
            .find(|o| o.selected)
            .map(|o| o.value.as_str())
    }
}

pub fn model_options(models: &[Model], selected: Option<&str>) -> Vec<SelectOption> {
    models
        .iter()
        .map(|m| SelectOption::new(&m.id, &m.name, Some(m.id.as_str()) == selected))
        .collect()
}

pub fn category_select_options(styles: &[Style], selected: &str) -> Vec<SelectOption> {
    category_options(styles)
        .into_iter()
        .map(|value| {
            let label = if value == ALL_CATEGORIES {
                ALL_CATEGORIES_LABEL.to_string()
            } else {
                value.clone()
            };
            let is_selected = value == selected;
            SelectOption::new(value, label, is_selected)
        })
        .collect()
}

/// Style selector contents for `category`.
///
/// "No style" is pinned first. With `with_custom`, a "custom" option is
/// pinned last and any catalog style reusing that id is dropped.
pub fn style_options(
    styles: &[Style],
    category: &str,
    selected: &str,
    with_custom: bool,
) -> StyleOptions {
    let option_for = |style: &Style| SelectOption::new(&style.id, &style.name, style.id == selected);
    let listed = |style: &&Style| !(with_custom && style.id == CUSTOM_STYLE_ID);

    let mut entries = vec![StyleEntry::Option(SelectOption::new(
        NO_STYLE_ID,
        NO_STYLE_LABEL,
        selected == NO_STYLE_ID,
    ))];

    match filter_styles(styles, category) {
        StyleListing::Grouped(groups) => {
            for group in groups {
                let options: Vec<SelectOption> =
                    group.styles.into_iter().filter(listed).map(option_for).collect();
                if !options.is_empty() {
                    entries.push(StyleEntry::Group {
                        label: group.label.to_string(),
                        options,
                    });
                }
            }
        }
        StyleListing::Flat(flat) => {
            entries.extend(
                flat.into_iter()
                    .filter(listed)
                    .map(|s| StyleEntry::Option(option_for(s))),
            );
        }
    }

    if with_custom {
        entries.push(StyleEntry::Option(SelectOption::new(
            CUSTOM_STYLE_ID,
            CUSTOM_STYLE_LABEL,
            selected == CUSTOM_STYLE_ID,
        )));
    }

    StyleOptions { entries }
}
