/// Blocking user interaction used by the controller.
///
/// Implementations decide how to ask: a terminal, a dialog, or a scripted
/// stub in tests.
pub trait Prompter {
    /// Ask for a value, pre-filled with `default`. `None` means cancelled.
    fn prompt(&mut self, message: &str, default: &str) -> Option<String>;

    /// Ask a yes/no question.
    fn confirm(&mut self, message: &str) -> bool;

    /// Show a notice.
    fn alert(&mut self, message: &str);
}
