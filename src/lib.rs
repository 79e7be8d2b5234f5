//! incpath - Rewrite root-relative include markers in C/C++ sources
//!
//! This library rewrites `#include "@/..."` directives, where `@/` marks a
//! path relative to the project root, into plain relative include paths
//! (`../` and subdirectory segments) from each including file.
//!
//! incpath treats file content as opaque text and only interprets the marker
//! pattern itself. It never resolves headers against the filesystem, so the
//! rewrite is purely lexical and works the same whether or not the target
//! header exists.
//!
//! # Example
//!
//! ```no_run
//! use incpath::{discover, rewrite};
//! use std::path::Path;
//!
//! let root = Path::new("/project");
//! let extensions = discover::default_extensions();
//!
//! for file in discover::discover(root, &extensions, &[]) {
//!     let (text, changed) = rewrite::rewrite_file(&file, root)?;
//!     if changed {
//!         std::fs::write(&file, text)?;
//!     }
//! }
//! # Ok::<(), incpath::Error>(())
//! ```

pub mod cli;
pub mod discover;
pub mod error;
pub mod rewrite;

// Re-export commonly used types
pub use error::{Error, Result};
