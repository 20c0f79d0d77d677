// Utilities Module
//
// Path helpers shared by the traversal driver.

/// Path conversion utilities (absolute ↔ relative Unix-style)
pub mod paths;

/// Excluded path segment matching
pub mod ignore;
