//! Post-processing for single-file HTML bundles.
//!
//! - [`sanitize`] rewrites forbidden text patterns (absolute URLs, workspace
//!   markers, source-map markers) into escaped or mangled forms.
//! - [`css`] pretty-prints inline `<style>` blocks and cross-checks them
//!   against a minified build.
//! - [`verify`] re-scans a document and reports anything left over.
//! - [`assemble`] turns the staged minified build and the readable build
//!   into the final distributable pair.

pub mod assemble;
pub mod css;
pub mod escape;
pub mod fsio;
pub mod patterns;
pub mod sanitize;
pub mod verify;

pub use assemble::{assemble, AssembleOutcome};
pub use css::{compare_styles, format_style_blocks, normalize, reformat};
pub use patterns::{forbidden_patterns, ForbiddenPattern};
pub use sanitize::{sanitize, sanitize_file, SanitizeOutcome};
pub use verify::{scan, verify_file, Finding, VerifyReport};
