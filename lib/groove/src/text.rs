use crate::traits::ItemText;

/// Trimmed text of the first selector candidate that matches inside `item`
/// with non-blank text, or an empty string.
///
/// Candidates let one lookup survive markup changes between page versions.
pub fn get_text<I, S>(item: &I, selectors: &[S]) -> String
where
    I: ItemText + ?Sized,
    S: AsRef<str>,
{
    selectors
        .iter()
        .filter_map(|selector| item.select_text(selector.as_ref()))
        .map(|text| text.trim().to_string())
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;

    use super::*;

    /// Stands in for a rendered element: selector -> text content.
    #[derive(Default)]
    pub(crate) struct FakeItem(HashMap<String, String>);

    impl FakeItem {
        pub(crate) fn with(mut self, selector: &str, text: &str) -> Self {
            self.0.insert(selector.to_string(), text.to_string());
            self
        }
    }

    impl ItemText for FakeItem {
        fn select_text(&self, selector: &str) -> Option<String> {
            self.0.get(selector).cloned()
        }
    }

    #[test]
    fn skips_blank_matches() {
        let item = FakeItem::default().with(".title", "   ").with(".name", "Echo");
        assert_eq!(get_text(&item, &[".title", ".name"]), "Echo");
    }

    #[test]
    fn first_candidate_wins() {
        let item = FakeItem::default()
            .with(".title", "  Nightcall\n")
            .with(".name", "Echo");
        assert_eq!(get_text(&item, &[".title", ".name"]), "Nightcall");
    }

    #[test]
    fn no_match_is_empty() {
        let item = FakeItem::default().with(".other", "x");
        assert_eq!(get_text(&item, &[".title", ".name"]), "");
        assert_eq!(get_text::<_, &str>(&item, &[]), "");
    }
}
