//! Debian repository metadata: `Packages` index parsing and dependency
//! resolution.

mod error;
pub mod index;
pub mod relation;
pub mod resolve;

pub use error::IndexError;
pub use index::{PackageIndex, PackageRecord};
pub use relation::{parse_relations, Relation};
pub use resolve::{Resolution, ResolvedPackage, Resolver};
