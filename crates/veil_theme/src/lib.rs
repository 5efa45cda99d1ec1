//! Veil Theme Layer
//!
//! Resolves the class-name prefix each component stamps onto its output.
//! Every component has a conventional default (`offcanvas`, `btn-toolbar`,
//! …) that a theme may override globally, so an entire application can be
//! re-skinned onto a different styling convention without touching component
//! code.
//!
//! # Example
//!
//! ```rust
//! use veil_theme::{PrefixToken, ThemeState};
//!
//! let theme = ThemeState::get();
//! assert_eq!(theme.prefix(PrefixToken::Offcanvas), "offcanvas");
//!
//! theme.set_prefix(PrefixToken::Offcanvas, "drawer");
//! assert_eq!(theme.prefix(PrefixToken::Offcanvas), "drawer");
//! # theme.set_prefix(PrefixToken::Offcanvas, "offcanvas");
//! ```

use rustc_hash::FxHashMap;
use std::sync::{OnceLock, RwLock};

/// Per-component prefix slots
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrefixToken {
    /// Togglable side panel
    Offcanvas,
    /// Button toolbar container
    ButtonToolbar,
    /// Floating-label form wrapper
    FormFloating,
    /// Labeled form group
    FormGroup,
}

impl PrefixToken {
    /// The conventional default prefix for this component
    pub fn default_prefix(self) -> &'static str {
        match self {
            PrefixToken::Offcanvas => "offcanvas",
            PrefixToken::ButtonToolbar => "btn-toolbar",
            PrefixToken::FormFloating => "form-floating",
            PrefixToken::FormGroup => "form-group",
        }
    }
}

/// Process-wide theme state
///
/// Lazily initialized; components read it through [`ThemeState::get`] at
/// build time rather than threading a theme handle through every builder.
pub struct ThemeState {
    overrides: RwLock<FxHashMap<PrefixToken, String>>,
}

static THEME: OnceLock<ThemeState> = OnceLock::new();

impl ThemeState {
    /// Access the global theme state
    pub fn get() -> &'static ThemeState {
        THEME.get_or_init(|| ThemeState {
            overrides: RwLock::new(FxHashMap::default()),
        })
    }

    /// Resolve a component's prefix, preferring any theme override
    pub fn prefix(&self, token: PrefixToken) -> String {
        self.overrides
            .read()
            .unwrap()
            .get(&token)
            .cloned()
            .unwrap_or_else(|| token.default_prefix().to_string())
    }

    /// Override a component prefix globally
    pub fn set_prefix(&self, token: PrefixToken, prefix: impl Into<String>) {
        let prefix = prefix.into();
        tracing::debug!(?token, %prefix, "theme prefix overridden");
        self.overrides.write().unwrap().insert(token, prefix);
    }

    /// Drop an override, restoring the conventional default
    pub fn reset_prefix(&self, token: PrefixToken) {
        self.overrides.write().unwrap().remove(&token);
    }
}

/// Resolve a prefix with an optional per-call override
///
/// Components call this with their caller-supplied prefix (if any); the
/// explicit value wins over both the theme override and the default.
pub fn resolve_prefix(explicit: Option<&str>, token: PrefixToken) -> String {
    match explicit {
        Some(prefix) => prefix.to_string(),
        None => ThemeState::get().prefix(token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(PrefixToken::Offcanvas.default_prefix(), "offcanvas");
        assert_eq!(PrefixToken::ButtonToolbar.default_prefix(), "btn-toolbar");
        assert_eq!(PrefixToken::FormFloating.default_prefix(), "form-floating");
        assert_eq!(PrefixToken::FormGroup.default_prefix(), "form-group");
    }

    #[test]
    fn test_explicit_prefix_wins() {
        assert_eq!(
            resolve_prefix(Some("sidebar"), PrefixToken::Offcanvas),
            "sidebar"
        );
    }

    #[test]
    fn test_override_and_reset() {
        // Use a token no other test resolves globally, since ThemeState is
        // shared across the test process.
        let theme = ThemeState::get();
        theme.set_prefix(PrefixToken::FormGroup, "field-group");
        assert_eq!(theme.prefix(PrefixToken::FormGroup), "field-group");

        theme.reset_prefix(PrefixToken::FormGroup);
        assert_eq!(theme.prefix(PrefixToken::FormGroup), "form-group");
    }
}
