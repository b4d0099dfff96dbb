//! # Tailor Scanner
//!
//! The ownership scanner and target synthesizer: given a search scope,
//! the set of already-owned files, and a per-extension classifier,
//! compute the putative declarations that would bring every unclaimed
//! source file under management.
//!
//! ## Pipeline
//!
//! ```text
//! SearchScope + extension
//!     │
//!     ├──> PathResolver (the one effectful read)
//!     │      └─> candidate paths
//!     │
//!     ├──> subtract OwnedPathSet
//!     │      └─> unowned candidates
//!     │
//!     ├──> Classifier (pure, total)
//!     │      └─> declaration-type groups
//!     │
//!     └──> group_by_dir + emit
//!            └─> PutativeDeclarations
//! ```
//!
//! Everything is recomputed per scan; nothing is cached or persisted.

mod backends;
mod classify;
mod error;
mod registry;
mod synth;

pub use backends::{JavaClassifier, KotlinClassifier};
pub use classify::{Classification, Classifier};
pub use error::{Result, ScannerError};
pub use registry::{BackendEntry, BackendRegistry};
pub use synth::synthesize;
