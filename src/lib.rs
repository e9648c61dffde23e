pub mod logging;
pub mod sort;
pub mod version;

/// Re-export commonly used items
pub use sort::{latest, sort_versions, sorted, SortOrder};
pub use version::{compare, equal, Version, VersionError, PKG_VERSION};
