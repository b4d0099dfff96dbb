//! # Tailor Resolver
//!
//! The path-resolution capability consumed by the ownership scanner:
//! turn a search scope plus an extension glob into the concrete set of
//! matching files.
//!
//! ```text
//! SearchScope ──path_globs("*.kt")──> PathGlobs
//!     PathGlobs ──PathResolver::resolve──> BTreeSet<relative path>
//! ```
//!
//! [`FsPathResolver`] is the filesystem implementation: a
//! gitignore-aware walk filtered through a compiled glob set. Callers
//! that already know their paths (tests, in-memory graphs) implement
//! [`PathResolver`] directly.

mod error;
mod resolver;
mod scope;

pub use error::{ResolveError, Result};
pub use resolver::{FsPathResolver, PathResolver};
pub use scope::{PathGlobs, SearchScope};
