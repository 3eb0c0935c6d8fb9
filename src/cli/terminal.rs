//! Coloured terminal output

use owo_colors::{OwoColorize, colors::css};

/// How a piece of command output should stand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    /// A record was written.
    Success,
    /// Something the user may want to look at, such as an empty professor.
    Warning,
    /// Department and professor headings.
    Heading,
    /// Secondary detail: ids, counts, cancelled prompts.
    Dim,
}

/// Renders `text` in `tone`, or leaves it untouched when `color` is off.
fn paint(text: &str, tone: Tone, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match tone {
        Tone::Success => text.fg::<css::Green>().to_string(),
        Tone::Warning => text.fg::<css::Orange>().to_string(),
        Tone::Heading => text.fg::<css::LightBlue>().to_string(),
        Tone::Dim => text.dimmed().to_string(),
    }
}

/// Records are printed to stdout, so that is the stream whose support counts.
fn stdout_has_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Extension trait for colorizing output
pub trait Colorize {
    /// Green, for completed writes
    fn success(&self) -> String;
    /// Amber
    fn warning(&self) -> String;
    /// Blue, for headings
    fn info(&self) -> String;
    /// Dim the text
    fn dim(&self) -> String;
}

impl<T: AsRef<str> + ?Sized> Colorize for T {
    fn success(&self) -> String {
        paint(self.as_ref(), Tone::Success, stdout_has_color())
    }

    fn warning(&self) -> String {
        paint(self.as_ref(), Tone::Warning, stdout_has_color())
    }

    fn info(&self) -> String {
        paint(self.as_ref(), Tone::Heading, stdout_has_color())
    }

    fn dim(&self) -> String {
        paint(self.as_ref(), Tone::Dim, stdout_has_color())
    }
}
