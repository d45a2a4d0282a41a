//! Locate YAML keys by dotted path.
//!
//! Given a YAML file and a key path such as `server.database.user`, find the
//! line on which that key is declared. The document is parsed fresh on every
//! call and never modified.
//!
//! When only a prefix of the path exists, the lookup resolves to the deepest
//! key that did match rather than failing; see [`Resolution`].
//!
//! ```rust
//! use keyline_core::{KeyPath, Resolution, find_key};
//!
//! let content = "server:\n  database:\n    user: admin\n";
//! let path: KeyPath = "server.database.user".parse().unwrap();
//!
//! let resolution = find_key(content, &path).unwrap().unwrap();
//! assert!(matches!(resolution, Resolution::Exact(_)));
//! ```

pub mod error;
pub mod key_path;
pub mod location;
pub mod lookup;
pub mod resolver;

pub use error::{Error, Result};
pub use key_path::KeyPath;
pub use location::{Location, LookupOptions, to_location};
pub use lookup::{find_key, get_yaml_line_number, get_yaml_location};
pub use resolver::{Resolution, resolve};
