// File: crates/plot-core/src/interaction.rs
// Summary: Hover/click state machine driven by pointer motion and button press/release.

/// Pointer state of one plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Hovered,
    /// Pressed inside, pointer has since left; the release still counts.
    ClickedAway,
    HoveredClicked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Middle,
    Secondary,
}

impl HoverState {
    pub fn is_hovered(self) -> bool {
        matches!(self, HoverState::Hovered | HoverState::HoveredClicked)
    }

    pub fn is_clicked(self) -> bool {
        matches!(self, HoverState::ClickedAway | HoverState::HoveredClicked)
    }

    pub fn on_motion(self, inside: bool) -> Self {
        match (self.is_clicked(), inside) {
            (false, false) => HoverState::Idle,
            (false, true) => HoverState::Hovered,
            (true, false) => HoverState::ClickedAway,
            (true, true) => HoverState::HoveredClicked,
        }
    }

    /// Primary press. Only registers while hovered.
    pub fn on_press(self) -> Self {
        if self.is_hovered() { HoverState::HoveredClicked } else { self }
    }

    /// Primary release. Returns the new state and whether a click completed.
    pub fn on_release(self) -> (Self, bool) {
        match self {
            HoverState::HoveredClicked => (HoverState::Hovered, true),
            HoverState::ClickedAway => (HoverState::Idle, true),
            other => (other, false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_outside_is_ignored() {
        assert_eq!(HoverState::Idle.on_press(), HoverState::Idle);
        assert_eq!(HoverState::Idle.on_release(), (HoverState::Idle, false));
    }

    #[test]
    fn click_survives_leaving() {
        let s = HoverState::Idle.on_motion(true).on_press().on_motion(false);
        assert_eq!(s, HoverState::ClickedAway);
        assert_eq!(s.on_motion(true), HoverState::HoveredClicked);
        assert_eq!(s.on_release(), (HoverState::Idle, true));
    }

    #[test]
    fn hovered_release_keeps_hover() {
        let s = HoverState::Hovered.on_press();
        assert_eq!(s.on_release(), (HoverState::Hovered, true));
    }
}
