//! Global state management

use dioxus::prelude::*;

/// Interface language. Arabic renders right-to-left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Arabic,
}

impl Language {
    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Arabic)
    }

    pub fn dir(&self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }

    /// Label shown on the switcher for the *other* language.
    pub fn switch_label(&self) -> &'static str {
        match self {
            Language::English => "\u{627}\u{644}\u{639}\u{631}\u{628}\u{64A}\u{629}", // العربية
            Language::Arabic => "English",
        }
    }

    pub fn toggled(&self) -> Language {
        match self {
            Language::English => Language::Arabic,
            Language::Arabic => Language::English,
        }
    }
}

/// Language context shared across the app
#[derive(Clone, Copy)]
pub struct LanguageState {
    pub current: Signal<Language>,
}

impl LanguageState {
    pub fn new() -> Self {
        Self {
            current: Signal::new(Language::default()),
        }
    }

    pub fn get(&self) -> Language {
        *self.current.read()
    }

    pub fn toggle(&self) {
        let mut current = self.current;
        let next = current.peek().toggled();
        current.set(next);
    }
}

/// Read the language context provided by the root component
pub fn use_language() -> LanguageState {
    use_context::<LanguageState>()
}
