use crate::config::{REVEAL_OFFSET_PX, REVEAL_TRANSITION, REVEAL_VIEWPORT_RATIO};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RevealState {
    pub revealed: bool,
}

impl RevealState {
    /// Reveal once the element's top is above the reveal line. Never hides again.
    pub fn observe(self, top: f64, viewport_height: f64) -> Self {
        RevealState {
            revealed: self.revealed || top < viewport_height * REVEAL_VIEWPORT_RATIO,
        }
    }

    pub fn style(&self) -> String {
        if self.revealed {
            format!("opacity: 1; transform: translateY(0); transition: {};", REVEAL_TRANSITION)
        } else {
            format!(
                "opacity: 0; transform: translateY({}px); transition: {};",
                REVEAL_OFFSET_PX, REVEAL_TRANSITION
            )
        }
    }
}
