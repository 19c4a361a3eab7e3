use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuState {
    pub open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuAction {
    Toggle,
    Close,
}

impl MenuState {
    pub fn next(self, action: MenuAction) -> Self {
        match action {
            MenuAction::Toggle => MenuState { open: !self.open },
            MenuAction::Close => MenuState { open: false },
        }
    }
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.next(action);
        if next == *self {
            self
        } else {
            log::debug!("menu open: {}", next.open);
            Rc::new(next)
        }
    }
}

/// Shared with every anchor link so a smooth scroll can close the mobile menu.
pub type MenuContext = UseReducerHandle<MenuState>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_open_state() {
        let closed = MenuState::default();
        let open = closed.next(MenuAction::Toggle);
        assert!(open.open);
        assert!(!open.next(MenuAction::Toggle).open);
    }

    #[test]
    fn close_is_idempotent() {
        let open = MenuState { open: true };
        let closed = open.next(MenuAction::Close);
        assert!(!closed.open);
        assert_eq!(closed.next(MenuAction::Close), closed);
    }
}
