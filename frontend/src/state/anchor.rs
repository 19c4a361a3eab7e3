use crate::config::ANCHOR_MARGIN_PX;

/// Id targeted by a same-page hash link. `#` and `#!` are placeholders, not anchors.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some("") | Some("!") | None => None,
        Some(id) => Some(id),
    }
}

/// Scroll offset that puts `target_top` just below the fixed header.
pub fn scroll_destination(target_top: f64, header_height: f64) -> f64 {
    target_top - header_height - ANCHOR_MARGIN_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_hashes_are_not_anchors() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("#!"), None);
    }

    #[test]
    fn only_hash_links_are_anchors() {
        assert_eq!(anchor_target("#pricing"), Some("pricing"));
        assert_eq!(anchor_target("/payment"), None);
        assert_eq!(anchor_target("https://mpago.la/2Afm7Ld"), None);
    }

    #[test]
    fn destination_clears_header_and_margin() {
        assert_eq!(scroll_destination(1000.0, 80.0), 900.0);
        assert_eq!(scroll_destination(50.0, 80.0), -50.0);
    }
}
