use crate::config::ACTIVE_LOOKAHEAD_PX;

/// An element with an id that a nav link can point at, with its offset from the top of the page.
#[derive(Clone, Debug, PartialEq)]
pub struct Landmark {
    pub id: String,
    pub top: f64,
}

impl Landmark {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Landmark { id: id.into(), top }
    }
}

/// Id of the last landmark, in document order, whose top the viewport has reached.
///
/// A landmark counts as reached once `scroll_y >= top - header_height - ACTIVE_LOOKAHEAD_PX`.
pub fn current_landmark(scroll_y: f64, header_height: f64, landmarks: &[Landmark]) -> Option<String> {
    landmarks
        .iter()
        .rev()
        .find(|landmark| scroll_y >= landmark.top - header_height - ACTIVE_LOOKAHEAD_PX)
        .map(|landmark| landmark.id.clone())
}

pub fn is_link_active(href: &str, current: Option<&str>) -> bool {
    match (href.strip_prefix('#'), current) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<Landmark> {
        vec![
            Landmark::new("home", 0.0),
            Landmark::new("features", 800.0),
            Landmark::new("pricing", 1600.0),
        ]
    }

    #[test]
    fn active_moves_as_scroll_advances() {
        let header = 80.0;
        let current = current_landmark(100.0, header, &sections());
        assert_eq!(current.as_deref(), Some("home"));
        assert!(is_link_active("#home", current.as_deref()));
        assert!(!is_link_active("#features", current.as_deref()));

        let current = current_landmark(700.0, header, &sections());
        assert_eq!(current.as_deref(), Some("features"));
        assert!(!is_link_active("#home", current.as_deref()));
        assert!(is_link_active("#features", current.as_deref()));
    }

    #[test]
    fn threshold_is_inclusive() {
        // 1600 - 80 - 100
        let current = current_landmark(1420.0, 80.0, &sections());
        assert_eq!(current.as_deref(), Some("pricing"));
        let current = current_landmark(1419.0, 80.0, &sections());
        assert_eq!(current.as_deref(), Some("features"));
    }

    #[test]
    fn nothing_active_before_first_landmark() {
        let landmarks = vec![Landmark::new("intro", 900.0), Landmark::new("setup", 1500.0)];
        assert_eq!(current_landmark(0.0, 60.0, &landmarks), None);
        assert!(!is_link_active("#intro", None));
        assert_eq!(current_landmark(0.0, 60.0, &[]), None);
    }

    #[test]
    fn last_qualifying_wins_even_when_out_of_order() {
        let landmarks = vec![Landmark::new("b", 500.0), Landmark::new("a", 100.0)];
        assert_eq!(current_landmark(450.0, 0.0, &landmarks).as_deref(), Some("a"));
    }

    #[test]
    fn non_hash_links_are_never_active() {
        assert!(!is_link_active("/docs", Some("docs")));
        assert!(!is_link_active("docs", Some("docs")));
    }
}
