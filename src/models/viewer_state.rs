//! Position and visible face while stepping through a deck.
//! Every move to a different card lands on the front.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewerState {
    pub current_index: usize,
    pub showing_front: bool,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            current_index: 0,
            showing_front: true,
        }
    }
}

impl ViewerState {
    pub fn flip(&mut self) {
        self.showing_front = !self.showing_front;
    }

    /// Moves forward unless already on the last of `deck_len` cards.
    /// Returns whether the index changed.
    pub fn next(&mut self, deck_len: usize) -> bool {
        if self.current_index + 1 < deck_len {
            self.current_index += 1;
            self.showing_front = true;
            true
        } else {
            false
        }
    }

    /// Moves back unless already on the first card.
    pub fn previous(&mut self) -> bool {
        if self.current_index > 0 {
            self.current_index -= 1;
            self.showing_front = true;
            true
        } else {
            false
        }
    }

    pub fn position_label(&self, deck_len: usize) -> String {
        format!("{} / {}", self.current_index + 1, deck_len)
    }
}
