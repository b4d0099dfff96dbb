//! # Tailor Declarations
//!
//! Data model for putative build-unit declarations: the declaration
//! types the scanner can propose, the ownership set it subtracts, and
//! the proposal shape downstream consumers rely on.
//!
//! All types here are ephemeral values recomputed on every scan; nothing
//! is persisted.

mod decl_type;
mod owned;
mod putative;
mod render;

pub use decl_type::DeclarationType;
pub use owned::OwnedPathSet;
pub use putative::{group_by_dir, PutativeDeclaration, PutativeDeclarations};
pub use render::{render_build_files, render_stanza};
