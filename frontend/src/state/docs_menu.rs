use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct DocsLink {
    pub href: &'static str,
    pub title: &'static str,
}

/// Top-level entry of the documentation side-nav, optionally owning a collapsible submenu.
#[derive(Clone, Debug, PartialEq)]
pub struct DocsEntry {
    pub link: DocsLink,
    pub submenu: Vec<DocsLink>,
}

impl DocsEntry {
    pub fn has_submenu(&self) -> bool {
        !self.submenu.is_empty()
    }
}

/// Index of the entry whose submenu contains `href`. Top-level links have no owner.
pub fn submenu_owner(entries: &[DocsEntry], href: &str) -> Option<usize> {
    entries
        .iter()
        .position(|entry| entry.submenu.iter().any(|link| link.href == href))
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocsMenuState {
    pub open: Vec<bool>,
    pub active: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DocsMenuAction {
    Toggle(usize),
    /// New active href plus the submenu holding it, which is forced open.
    Activate { href: Option<String>, owner: Option<usize> },
}

impl DocsMenuAction {
    /// Activation for the heading `current_id` is scrolled to. Sent on every scroll,
    /// not only on change, so a submenu collapsed by hand reopens around its active link.
    pub fn activate(entries: &[DocsEntry], current_id: Option<&str>) -> Self {
        let href = current_id.map(|id| format!("#{}", id));
        let owner = href.as_deref().and_then(|href| submenu_owner(entries, href));
        DocsMenuAction::Activate { href, owner }
    }
}

impl DocsMenuState {
    pub fn new(entries: usize) -> Self {
        DocsMenuState {
            open: vec![false; entries],
            active: None,
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    pub fn is_active(&self, href: &str) -> bool {
        self.active.as_deref() == Some(href)
    }

    pub fn next(&self, action: DocsMenuAction) -> Self {
        let mut next = self.clone();
        match action {
            DocsMenuAction::Toggle(index) => {
                if let Some(open) = next.open.get_mut(index) {
                    *open = !*open;
                }
            }
            DocsMenuAction::Activate { href, owner } => {
                if let Some(open) = owner.and_then(|index| next.open.get_mut(index)) {
                    *open = true;
                }
                next.active = href;
            }
        }
        next
    }
}

impl Reducible for DocsMenuState {
    type Action = DocsMenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.next(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::anchor::anchor_target;

    fn entries() -> Vec<DocsEntry> {
        vec![
            DocsEntry {
                link: DocsLink { href: "#intro", title: "Introduction" },
                submenu: vec![],
            },
            DocsEntry {
                link: DocsLink { href: "#setup", title: "Setup" },
                submenu: vec![
                    DocsLink { href: "#requirements", title: "Requirements" },
                    DocsLink { href: "#install", title: "Install" },
                ],
            },
            DocsEntry {
                link: DocsLink { href: "#usage", title: "Usage" },
                submenu: vec![DocsLink { href: "#upload", title: "Upload" }],
            },
        ]
    }

    #[test]
    fn submenus_toggle_independently() {
        let state = DocsMenuState::new(3)
            .next(DocsMenuAction::Toggle(1))
            .next(DocsMenuAction::Toggle(2));
        assert!(state.is_open(1));
        assert!(state.is_open(2));

        let state = state.next(DocsMenuAction::Toggle(1));
        assert!(!state.is_open(1));
        assert!(state.is_open(2));
    }

    #[test]
    fn toggle_out_of_range_is_ignored() {
        let state = DocsMenuState::new(2);
        assert_eq!(state.next(DocsMenuAction::Toggle(7)), state);
        assert!(!state.is_open(7));
    }

    #[test]
    fn activating_nested_link_forces_its_submenu_open() {
        let entries = entries();
        let owner = submenu_owner(&entries, "#install");
        assert_eq!(owner, Some(1));

        let state = DocsMenuState::new(entries.len()).next(DocsMenuAction::Activate {
            href: Some("#install".to_string()),
            owner,
        });
        assert!(state.is_active("#install"));
        assert!(state.is_open(1));
        assert!(!state.is_open(2));
    }

    #[test]
    fn activating_top_level_link_opens_nothing() {
        let entries = entries();
        assert_eq!(submenu_owner(&entries, "#intro"), None);
        assert_eq!(submenu_owner(&entries, "#setup"), None);

        let state = DocsMenuState::new(entries.len()).next(DocsMenuAction::Activate {
            href: Some("#intro".to_string()),
            owner: None,
        });
        assert_eq!(state.open, vec![false, false, false]);
    }

    #[test]
    fn collapsed_submenu_reopens_on_next_scroll_in_same_section() {
        let entries = entries();
        let state = DocsMenuState::new(entries.len())
            .next(DocsMenuAction::activate(&entries, Some("upload")));
        assert!(state.is_open(2));

        let collapsed = state.next(DocsMenuAction::Toggle(2));
        assert!(!collapsed.is_open(2));
        assert!(collapsed.is_active("#upload"));

        let rescrolled = collapsed.next(DocsMenuAction::activate(&entries, Some("upload")));
        assert!(rescrolled.is_open(2));
        assert!(rescrolled.is_active("#upload"));
    }

    #[test]
    fn activate_without_heading_clears_active_link() {
        let entries = entries();
        assert_eq!(
            DocsMenuAction::activate(&entries, None),
            DocsMenuAction::Activate { href: None, owner: None }
        );
        assert_eq!(
            DocsMenuAction::activate(&entries, Some("requirements")),
            DocsMenuAction::Activate { href: Some("#requirements".to_string()), owner: Some(1) }
        );
    }

    #[test]
    fn submenu_owning_links_still_scroll_to_their_heading() {
        let entries = entries();
        let owners: Vec<_> = entries.iter().filter(|entry| entry.has_submenu()).collect();
        assert_eq!(owners.len(), 2);
        for entry in owners {
            let id = anchor_target(entry.link.href).unwrap();
            assert_eq!(format!("#{}", id), entry.link.href);
        }
    }

    #[test]
    fn forced_open_submenu_stays_open_after_scrolling_away() {
        let state = DocsMenuState::new(3)
            .next(DocsMenuAction::Activate { href: Some("#upload".to_string()), owner: Some(2) })
            .next(DocsMenuAction::Activate { href: None, owner: None });
        assert!(state.is_open(2));
        assert_eq!(state.active, None);
    }
}
