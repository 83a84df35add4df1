/// Router Module Index
///
/// Splits the routing table by how the access gate classifies each group.
/// The gate itself is applied once, around the merged router, in `create_router`.

/// The landing page and the login page.
pub mod public;

/// Pages the gate classifies as protected.
pub mod pages;

/// JSON endpoints under `/api`, which the gate never evaluates.
pub mod api;
