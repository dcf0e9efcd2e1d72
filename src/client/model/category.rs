use crate::model::category::{CategoryDto, DEFAULT_CATEGORIES};

const FALLBACK_COLOUR: &str = "6b7280";

/// CSS colour of a category, looked up in the loaded categories first and the
/// built-in defaults second.
pub fn category_colour(categories: &[CategoryDto], name: &str) -> String {
    let hex = categories
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.colour.as_str())
        .or_else(|| {
            DEFAULT_CATEGORIES
                .iter()
                .find(|(default, _)| *default == name)
                .map(|(_, colour)| *colour)
        })
        .unwrap_or(FALLBACK_COLOUR);

    format!("#{}", hex)
}

/// Category names to offer in pickers: loaded categories, or the defaults
/// while they are unavailable.
pub fn category_names(categories: &[CategoryDto]) -> Vec<String> {
    if categories.is_empty() {
        DEFAULT_CATEGORIES
            .iter()
            .map(|(name, _)| name.to_string())
            .collect()
    } else {
        categories.iter().map(|c| c.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loaded_colour_wins_over_default() {
        let categories = vec![CategoryDto {
            id: 1,
            name: "science".to_string(),
            colour: "000000".to_string(),
        }];

        assert_eq!(category_colour(&categories, "science"), "#000000");
    }

    #[test]
    fn falls_back_to_default_then_grey() {
        assert_eq!(category_colour(&[], "finance"), "#ef4444");
        assert_eq!(category_colour(&[], "unknown"), "#6b7280");
    }

    #[test]
    fn names_default_when_nothing_loaded() {
        assert_eq!(category_names(&[]).len(), DEFAULT_CATEGORIES.len());
    }
}
