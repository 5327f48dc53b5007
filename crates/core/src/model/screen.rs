/// Top-level screens of the quiz application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Welcome,
    Menu,
    Quiz,
    Result,
}

impl Screen {
    /// Whether moving from `self` to `to` is a valid edge of the screen graph.
    #[must_use]
    pub fn can_transition(self, to: Screen) -> bool {
        matches!(
            (self, to),
            (Screen::Welcome, Screen::Menu)
                | (Screen::Menu, Screen::Quiz)
                | (Screen::Menu, Screen::Welcome)
                | (Screen::Quiz, Screen::Result)
                | (Screen::Quiz, Screen::Menu)
                | (Screen::Result, Screen::Menu)
        )
    }

    /// Move to `to` if the edge is valid. Invalid transitions leave `self` untouched.
    pub fn transition(&mut self, to: Screen) -> bool {
        if self.can_transition(to) {
            *self = to;
            true
        } else {
            false
        }
    }
}
