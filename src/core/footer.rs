//! Footer copyright year

use super::dom::Dom;

/// Write `year` into `#year`. Returns whether the element exists.
pub fn set_footer_year<D: Dom>(dom: &D, year: i32) -> bool {
    match dom.by_id("year") {
        Some(element) => {
            dom.set_text(&element, &year.to_string());
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::FakeDom;

    #[test]
    fn test_set_footer_year() {
        let dom = FakeDom::new();
        let year = dom.add(FakeDom::BODY, "span", &[("id", "year")]);
        assert!(set_footer_year(&*dom, 2026));
        assert_eq!(dom.text(year), "2026");
    }

    #[test]
    fn test_set_footer_year_missing_element() {
        let dom = FakeDom::new();
        assert!(!set_footer_year(&*dom, 2026));
    }
}
