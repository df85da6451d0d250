//! Core traits for text-to-Braille translators

/// Anything that turns text into Braille
///
/// Implementations are total: every input produces an output, unknown
/// characters are copied through instead of failing.
pub trait Translator: Send + Sync {
    /// Translate `text` into Unicode Braille
    fn translate(&self, text: &str) -> String;

    /// Human-readable name of the translator
    fn name(&self) -> &str {
        "braille"
    }
}

impl<T: Translator + ?Sized> Translator for &T {
    fn translate(&self, text: &str) -> String {
        (**self).translate(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Translator + ?Sized> Translator for Box<T> {
    fn translate(&self, text: &str) -> String {
        (**self).translate(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Translator + ?Sized> Translator for std::sync::Arc<T> {
    fn translate(&self, text: &str) -> String {
        (**self).translate(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
