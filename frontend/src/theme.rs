use crate::config::{LEGACY_DARK_MODE_KEY, THEME_KEY};
use crate::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Reads the stored preference. A `darkMode` flag left by older builds is
/// migrated into `theme` the first time it is seen.
pub fn load_theme(store: &dyn KeyValueStore) -> Theme {
    if let Some(theme) = store.get(THEME_KEY).as_deref().and_then(Theme::parse) {
        return theme;
    }

    match store.get(LEGACY_DARK_MODE_KEY) {
        Some(flag) => {
            let theme = if flag == "true" { Theme::Dark } else { Theme::Light };
            store.set(THEME_KEY, theme.as_str());
            store.remove(LEGACY_DARK_MODE_KEY);
            theme
        }
        None => Theme::default(),
    }
}

pub fn save_theme(store: &dyn KeyValueStore, theme: Theme) {
    store.set(THEME_KEY, theme.as_str());
}

/// Sets `data-theme` on the document element.
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());
    if let Some(root) = root {
        if root.set_attribute("data-theme", theme.as_str()).is_err() {
            log::warn!("could not apply theme {}", theme.as_str());
        }
    }
}

pub fn apply_stored_theme(store: &dyn KeyValueStore) -> Theme {
    let theme = load_theme(store);
    apply_theme(theme);
    theme
}

/// Flips the stored theme and returns the new one. Touches storage only.
pub fn toggle_stored_theme(store: &dyn KeyValueStore) -> Theme {
    let next = load_theme(store).toggled();
    save_theme(store, next);
    next
}

pub fn toggle_dark(store: &dyn KeyValueStore) -> Theme {
    let next = toggle_stored_theme(store);
    apply_theme(next);
    log::debug!("theme switched to {}", next.as_str());
    next
}
