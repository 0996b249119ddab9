//! Status output helpers
//!
//! Human-readable output uses unicode icons when the terminal and locale
//! look capable, with a plain ASCII fallback for dumb terminals and CI
//! logs.

use is_terminal::IsTerminal;

/// Icon set for human-readable status lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icons {
    pub success: &'static str,
    pub arrow: &'static str,
    pub info: &'static str,
}

impl Icons {
    pub fn unicode() -> Self {
        Self {
            success: "✓",
            arrow: "→",
            info: "•",
        }
    }

    pub fn ascii() -> Self {
        Self {
            success: "[OK]",
            arrow: "->",
            info: "-",
        }
    }

    /// Pick an icon set for the current terminal and environment
    pub fn detect() -> Self {
        if std::io::stdout().is_terminal() && unicode_locale(|key| std::env::var(key).ok()) {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Decide whether the environment advertises unicode support.
///
/// TERM=dumb opts out. A locale variable mentioning UTF-8 opts in. With no
/// locale hints at all, unicode is assumed.
fn unicode_locale(get_env: impl Fn(&str) -> Option<String>) -> bool {
    if let Some(term) = get_env("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }

    for key in ["LC_ALL", "LC_CTYPE", "LANG"] {
        if let Some(value) = get_env(key) {
            let value = value.to_lowercase();
            if value.contains("utf-8") || value.contains("utf8") {
                return true;
            }
        }
    }

    true
}
