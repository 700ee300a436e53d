/// Presentation flags of the navigation shell. Neither is persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ShellState {
    /// Navigation panel open.
    pub expanded: bool,
    /// Generic switch in the header, unrelated to the appearance.
    pub switch_on: bool,
}

impl ShellState {
    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn toggle_switch(&mut self) {
        self.switch_on = !self.switch_on;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_expanded_leaves_switch() {
        let mut state = ShellState { expanded: false, switch_on: true };
        state.toggle_expanded();
        assert_eq!(state, ShellState { expanded: true, switch_on: true });
        state.toggle_expanded();
        assert_eq!(state, ShellState { expanded: false, switch_on: true });
    }

    #[test]
    fn test_toggle_switch_leaves_expanded() {
        let mut state = ShellState::default();
        state.toggle_switch();
        assert_eq!(state, ShellState { expanded: false, switch_on: true });
        state.toggle_switch();
        assert_eq!(state, ShellState::default());
    }
}
