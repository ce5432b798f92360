//! Service manifest files
//!
//! ```yaml
//! create-services:
//! - name: my-db
//!   broker: p-mysql
//!   plan: 100mb
//!   parameters:
//!     max_connections: 20
//! ```

mod yaml;

pub use yaml::{find_manifest, load_manifest, parse_manifest};
