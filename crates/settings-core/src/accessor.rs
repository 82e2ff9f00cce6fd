//! Path-tracking typed accessor over a [`Value`] tree.
//!
//! Navigation with [`Settings::get`] never fails. A missing key, or a step
//! through something that is not a mapping, yields an accessor holding
//! [`Value::Absent`]; the error only surfaces once a typed extraction is
//! attempted, and it names the full path that led there.
//!
//! Extraction is exact: the stored variant must be the requested one. There is
//! no widening between integer widths, no int/uint/float crossover, and no
//! parsing of numbers out of strings. The single exception is
//! [`Settings::bytes`], which also accepts a string.

use tracing::{debug, error};

use crate::error::{Result, SettingsError};
use crate::path::SettingPath;
use crate::value::{Value, ValueKind};

static ABSENT: Value = Value::Absent;

/// A read-only view of one node in a settings tree, plus the keys used to reach it.
///
/// Accessors borrow the tree and never modify it or themselves; every call
/// returns a fresh accessor or a plain result.
#[derive(Debug, Clone)]
pub struct Settings<'a> {
    path: SettingPath,
    data: &'a Value,
}

/// Generates the fallible extractor and its panicking `must_` twin for a
/// variant whose payload is `Copy`.
macro_rules! scalar_accessor {
    ($(#[$doc:meta])* $name:ident, $must:ident, $variant:ident, $ty:ty) => {
        $(#[$doc])*
        pub fn $name(&self) -> Result<$ty> {
            match self.data {
                Value::$variant(v) => Ok(*v),
                _ => Err(self.mismatch(ValueKind::$variant)),
            }
        }

        #[doc = concat!("Like [`Settings::", stringify!($name), "`], but panics on a type mismatch.")]
        pub fn $must(&self) -> $ty {
            self.$name().unwrap_or_else(|err| fatal(err))
        }
    };
}

impl<'a> Settings<'a> {
    /// Wrap `value` as the root of a settings tree.
    ///
    /// ```
    /// use settings_core::{Settings, Value};
    ///
    /// let root = Value::from("test");
    /// let settings = Settings::new(&root);
    /// assert_eq!(settings.string().unwrap(), "test");
    /// assert_eq!(settings.bytes().unwrap(), b"test");
    /// ```
    pub fn new(value: &'a Value) -> Self {
        Self {
            path: SettingPath::root(),
            data: value,
        }
    }

    /// Descend into `key`.
    ///
    /// Always returns an accessor. If the current node is not a mapping, or
    /// has no such key, the child holds [`Value::Absent`].
    ///
    /// ```
    /// use settings_core::{Settings, Value};
    ///
    /// let root = Value::from_iter([("testkey", "testvalue")]);
    /// let settings = Settings::new(&root);
    /// assert_eq!(settings.get("testkey").string().unwrap(), "testvalue");
    /// assert!(settings.get("missing").get("deeper").value().is_absent());
    /// ```
    pub fn get(&self, key: &str) -> Settings<'a> {
        Settings {
            path: self.path.child(key),
            data: self.data.child(key).unwrap_or(&ABSENT),
        }
    }

    /// Keys traversed from the root to reach this node.
    pub fn path(&self) -> &SettingPath {
        &self.path
    }

    /// The raw stored value, with no type check.
    pub fn value(&self) -> &'a Value {
        self.data
    }

    /// The stored string.
    pub fn string(&self) -> Result<&'a str> {
        match self.data {
            Value::String(s) => Ok(s.as_str()),
            _ => Err(self.mismatch(ValueKind::String)),
        }
    }

    /// Like [`Settings::string`], but panics on a type mismatch.
    pub fn must_string(&self) -> &'a str {
        self.string().unwrap_or_else(|err| fatal(err))
    }

    /// The stored bytes, or the UTF-8 encoding of a stored string.
    ///
    /// Both cases borrow from the tree; nothing is copied.
    pub fn bytes(&self) -> Result<&'a [u8]> {
        match self.data {
            Value::String(s) => Ok(s.as_bytes()),
            Value::Bytes(b) => Ok(b.as_slice()),
            _ => Err(self.mismatch(ValueKind::Bytes)),
        }
    }

    /// Like [`Settings::bytes`], but panics on a type mismatch.
    pub fn must_bytes(&self) -> &'a [u8] {
        self.bytes().unwrap_or_else(|err| fatal(err))
    }

    scalar_accessor!(
        /// The stored native-width signed integer.
        int, must_int, Int, isize
    );

    scalar_accessor!(
        /// The stored 64-bit signed integer.
        int64, must_int64, Int64, i64
    );

    scalar_accessor!(
        /// The stored native-width unsigned integer.
        uint, must_uint, Uint, usize
    );

    scalar_accessor!(
        /// The stored 64-bit unsigned integer.
        uint64, must_uint64, Uint64, u64
    );

    scalar_accessor!(
        /// The stored 64-bit float.
        float64, must_float64, Float64, f64
    );

    fn mismatch(&self, expected: ValueKind) -> SettingsError {
        let found = self.data.kind();
        debug!(path = %self.path, %expected, %found, "setting type mismatch");
        SettingsError::InvalidSetting {
            path: self.path.clone(),
            expected,
            found,
        }
    }
}

impl<'a> From<&'a Value> for Settings<'a> {
    fn from(value: &'a Value) -> Self {
        Settings::new(value)
    }
}

fn fatal(err: SettingsError) -> ! {
    error!(path = %err.path(), "required setting is invalid");
    panic!("{err}")
}
