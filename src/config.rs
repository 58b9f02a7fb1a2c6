//! Formatting configuration (`spec.md` §6's "Canonical formatting rules").

/// Knobs the pretty-print engine consults. Kept as a trait, the way
/// `tergo-formatter` takes `config: &impl FormattingConfig` rather than
/// a concrete struct, so callers embedding this crate inside a larger
/// configuration surface can implement it on their own type.
pub trait FormattingConfig {
    /// Target text width in Unicode scalar values. 100 is the default
    /// (`spec.md` §6).
    fn line_length(&self) -> i32;

    /// Indentation step for `Nest`, in columns. The spec fixes this at
    /// 4 but the engine never hardcodes it so a caller can still
    /// override it.
    fn indent_step(&self) -> i32 {
        4
    }
}

/// The concrete configuration this crate ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub text_width: u32,
    pub indent_step: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            text_width: 100,
            indent_step: 4,
        }
    }
}

impl FormattingConfig for Config {
    fn line_length(&self) -> i32 {
        self.text_width as i32
    }

    fn indent_step(&self) -> i32 {
        self.indent_step as i32
    }
}
