//! # settings-core
//!
//! Typed accessors over dynamically-structured configuration trees.
//!
//! Configuration often arrives as a loosely-typed tree of nested mappings,
//! typically produced by a JSON or YAML decoder. `settings-core` lets a caller
//! walk a path of keys into that tree and read the value found there as a
//! specific scalar type, with errors that name the full path on a mismatch.
//!
//! ## Quick start
//!
//! ```rust
//! use settings_core::{Settings, Value};
//!
//! let root = Value::from_iter([(
//!     "server",
//!     Value::from_iter([("host", Value::from("localhost")), ("port", Value::from(8080u64))]),
//! )]);
//! let settings = Settings::new(&root);
//!
//! assert_eq!(settings.get("server").get("host").string().unwrap(), "localhost");
//! assert_eq!(settings.get("server").get("port").must_uint64(), 8080);
//!
//! let err = settings.get("server").get("tls").string().unwrap_err();
//! assert_eq!(err.to_string(), "invalid setting at path: [server tls]");
//! ```
//!
//! ## Modules
//!
//! - [`accessor`] — `Settings`, navigation and typed extraction
//! - [`value`] — `Value` tree model and conversions
//! - [`path`] — `SettingPath` used in diagnostics
//! - [`error`] — Error types

pub mod accessor;
pub mod error;
pub mod path;
pub mod value;

pub use accessor::Settings;
pub use error::{Result, SettingsError};
pub use path::SettingPath;
pub use value::{Mapping, Value, ValueKind};
