//! Display sink contract.

/// Where the calculator sends everything it shows.
///
/// Calls are fire-and-forget; a sink has no way to report failure back.
pub trait DisplaySink {
    /// Show an operand or a result on the main line.
    fn render(&mut self, text: &str);

    /// Show an error message on the main line.
    ///
    /// Defaults to [`render`](Self::render) for sinks that draw errors no
    /// differently from numbers.
    fn render_error(&mut self, message: &str) {
        self.render(message);
    }

    /// Show the operation history line.
    fn render_history(&mut self, text: &str);

    /// Blank the history line.
    fn clear_history(&mut self);
}

/// In-memory display holding whatever was last rendered.
///
/// ```rust
/// use tenkey::{Calculator, Screen};
///
/// let mut calc = Calculator::new(Screen::default());
/// for key in ["1", "+", "2", "="] {
///     calc.press(key);
/// }
/// assert_eq!(calc.display().main(), "3");
/// assert_eq!(calc.display().history(), "1+2=");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Screen {
    main: String,
    history: String,
    error: bool,
}

impl Screen {
    pub fn main(&self) -> &str {
        &self.main
    }

    pub fn history(&self) -> &str {
        &self.history
    }

    /// True while the main line shows an error message.
    pub fn is_error(&self) -> bool {
        self.error
    }
}

impl DisplaySink for Screen {
    fn render(&mut self, text: &str) {
        self.main = text.to_string();
        self.error = false;
    }

    fn render_error(&mut self, message: &str) {
        self.main = message.to_string();
        self.error = true;
    }

    fn render_history(&mut self, text: &str) {
        self.history = text.to_string();
    }

    fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.history)?;
        write!(f, "{}", self.main)
    }
}
