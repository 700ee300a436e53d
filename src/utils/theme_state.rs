/// Snapshot of the resolved appearance handed to the view layer.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ThemeState {
    pub is_dark: bool,
}

impl ThemeState {
    /// Class applied to the root element.
    pub fn root_class(self) -> &'static str {
        if self.is_dark { "dark" } else { "" }
    }

    /// Label of the dark-mode button: the mode a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        if self.is_dark { "🌞" } else { "🌙" }
    }

    pub fn nav_class(self) -> &'static str {
        if self.is_dark {
            "bg-dark-primary shadow-lg transition-colors duration-200"
        } else {
            "bg-white shadow-lg transition-colors duration-200"
        }
    }

    pub fn link_class(self) -> &'static str {
        if self.is_dark {
            "text-white hover:text-primary transition-colors"
        } else {
            "text-gray-800 hover:text-primary transition-colors"
        }
    }

    pub fn button_class(self) -> &'static str {
        if self.is_dark {
            "p-2 rounded-lg bg-gray-700 hover:bg-gray-600 transition-colors"
        } else {
            "p-2 rounded-lg bg-gray-200 hover:bg-gray-300 transition-colors"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        let theme = ThemeState::default();
        assert!(!theme.is_dark);
        assert_eq!(theme.root_class(), "");
        assert_eq!(theme.toggle_icon(), "🌙");
    }

    #[test]
    fn test_dark_classes() {
        let theme = ThemeState { is_dark: true };
        assert_eq!(theme.root_class(), "dark");
        assert!(theme.nav_class().starts_with("bg-dark-primary"));
    }
}
