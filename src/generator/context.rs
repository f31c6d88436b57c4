use once_cell::unsync::OnceCell;
use std::collections::BTreeMap;

/// Header template input for one run
///
/// Holds a single strategy-defined key whose value is set at most once, by
/// the first unit that declares a package. Later seeds are ignored.
#[derive(Debug)]
pub struct GenerationContext {
    key: String,
    value: OnceCell<String>,
}

impl GenerationContext {
    /// Empty context keyed by `key`
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: OnceCell::new(),
        }
    }

    /// Set the value unless already set; `true` if this call set it
    pub fn seed(&self, value: &str) -> bool {
        self.value.set(value.to_string()).is_ok()
    }

    /// Context key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Seeded value
    pub fn value(&self) -> Option<&str> {
        self.value.get().map(String::as_str)
    }

    /// Mapping handed to the header template; empty until seeded
    pub fn to_map(&self) -> BTreeMap<&str, &str> {
        self.value()
            .map(|v| (self.key.as_str(), v))
            .into_iter()
            .collect()
    }
}
