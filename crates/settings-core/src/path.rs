//! Diagnostic key paths.

use std::fmt;

/// Ordered keys traversed from the root to reach a setting.
///
/// Only used for error reporting. Displays as the keys separated by single
/// spaces inside square brackets, e.g. `[server tls cert]`; the root is `[]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SettingPath {
    keys: Vec<String>,
}

impl SettingPath {
    /// An empty path, pointing at the root.
    pub fn root() -> Self {
        Self::default()
    }

    /// A new path with `key` appended. `self` is left untouched.
    pub fn child(&self, key: &str) -> Self {
        let mut keys = Vec::with_capacity(self.keys.len() + 1);
        keys.extend(self.keys.iter().cloned());
        keys.push(key.to_owned());
        Self { keys }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn is_root(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl fmt::Display for SettingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(key)?;
        }
        f.write_str("]")
    }
}

impl<S: Into<String>> FromIterator<S> for SettingPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}
