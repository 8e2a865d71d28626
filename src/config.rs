//! Feature configuration and the two-level enabled/disabled gate.
//!
//! Every feature is guarded by a global toggle (`typescript.enable`) and a
//! per-feature toggle (`typescript.<feature>.enable`). Both must be on.
//! Configuration may change between calls, so the gate re-reads it every time.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

/// Key of the global toggle.
pub const GLOBAL_KEY: &str = "typescript.enable";

/// Boolean configuration lookup by dotted key.
pub trait FeatureConfig: Send + Sync {
    /// Whether the setting at `key` is on.
    fn enabled(&self, key: &str) -> bool;
}

/// An editor feature the adapter can serve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    Diagnostics,
    Hover,
    DocumentSymbols,
    Completions,
    Definitions,
    CodeActions,
}

impl Feature {
    /// All features, in declaration order.
    pub const ALL: [Feature; 6] = [
        Feature::Diagnostics,
        Feature::Hover,
        Feature::DocumentSymbols,
        Feature::Completions,
        Feature::Definitions,
        Feature::CodeActions,
    ];

    /// The feature's segment in its configuration key.
    pub const fn key(self) -> &'static str {
        match self {
            Feature::Diagnostics => "diagnostics",
            Feature::Hover => "hover",
            Feature::DocumentSymbols => "documentSymbols",
            Feature::Completions => "completions",
            Feature::Definitions => "definitions",
            Feature::CodeActions => "codeActions",
        }
    }

    /// Full dotted key of the per-feature toggle, e.g. `typescript.hover.enable`.
    pub fn config_key(self) -> String {
        format!("typescript.{}.enable", self.key())
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Answers whether a feature is currently enabled.
#[derive(Clone)]
pub struct FeatureGate {
    config: Arc<dyn FeatureConfig>,
}

impl FeatureGate {
    /// Create a gate over a configuration source.
    pub fn new(config: Arc<dyn FeatureConfig>) -> Self {
        Self { config }
    }

    /// Both the global and the feature's own toggle must be on.
    pub fn enabled(&self, feature: Feature) -> bool {
        let enabled =
            self.config.enabled(GLOBAL_KEY) && self.config.enabled(&feature.config_key());
        if !enabled {
            tracing::trace!(%feature, "feature disabled");
        }
        enabled
    }
}

impl fmt::Debug for FeatureGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureGate").finish_non_exhaustive()
    }
}

/// Layered settings store: built-in defaults overlaid by user overrides.
///
/// Every key known to the gate defaults to on. Unknown keys are off unless
/// overridden. Thread-safe via internal locking, so toggles can flip between
/// requests while the adapter is shared.
#[derive(Default)]
pub struct Settings {
    overrides: RwLock<FxHashMap<SmolStr, bool>>,
}

impl Settings {
    /// Settings with every feature on.
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings with the given overrides applied on top of the defaults.
    pub fn from_overrides<K, I>(overrides: I) -> Self
    where
        K: Into<SmolStr>,
        I: IntoIterator<Item = (K, bool)>,
    {
        let settings = Self::new();
        for (key, value) in overrides {
            settings.set(key, value);
        }
        settings
    }

    /// Builder form of [`Settings::set`].
    pub fn with_override(self, key: impl Into<SmolStr>, value: bool) -> Self {
        self.set(key, value);
        self
    }

    /// Override a key.
    pub fn set(&self, key: impl Into<SmolStr>, value: bool) {
        self.overrides.write().insert(key.into(), value);
    }

    /// Drop an override, falling back to the default.
    pub fn reset(&self, key: &str) -> Option<bool> {
        self.overrides.write().remove(key)
    }

    /// Built-in value for `key`.
    pub fn default_value(key: &str) -> bool {
        key == GLOBAL_KEY
            || Feature::ALL
                .iter()
                .any(|feature| feature.config_key() == key)
    }
}

impl FeatureConfig for Settings {
    fn enabled(&self, key: &str) -> bool {
        self.overrides
            .read()
            .get(key)
            .copied()
            .unwrap_or_else(|| Self::default_value(key))
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("overrides", &self.overrides.read().len())
            .finish()
    }
}
