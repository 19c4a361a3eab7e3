use std::rc::Rc;
use yew::prelude::*;

/// Accordion state: the index of the single open item, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FaqState {
    pub active: Option<usize>,
}

impl FaqState {
    pub fn click(self, index: usize) -> Self {
        if self.active == Some(index) {
            FaqState { active: None }
        } else {
            FaqState { active: Some(index) }
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }
}

impl Reducible for FaqState {
    type Action = usize;

    fn reduce(self: Rc<Self>, index: usize) -> Rc<Self> {
        Rc::new(self.click(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(state: FaqState, len: usize) -> usize {
        (0..len).filter(|i| state.is_active(*i)).count()
    }

    #[test]
    fn clicking_closed_item_opens_it_and_closes_siblings() {
        let state = FaqState::default().click(0).click(2);
        assert!(state.is_active(2));
        assert!(!state.is_active(0));
    }

    #[test]
    fn clicking_open_item_closes_it() {
        let state = FaqState::default().click(1).click(1);
        assert_eq!(state.active, None);
    }

    #[test]
    fn never_more_than_one_active() {
        let clicks = [0, 1, 1, 3, 2, 2, 2, 0, 4, 4, 1];
        let mut state = FaqState::default();
        for index in clicks {
            state = state.click(index);
            assert!(active_count(state, 5) <= 1);
        }
        assert!(state.is_active(1));
    }
}
