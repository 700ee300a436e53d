mod shell_state;
mod theme_state;

pub use shell_state::ShellState;
pub use theme_state::ThemeState;
