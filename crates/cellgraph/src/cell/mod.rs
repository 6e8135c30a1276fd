//! Cells: validated faces and the constraints they are checked against.
//!
//! Purpose
//! - Turn one ordered node loop (from face enumeration or from the seed walk)
//!   into a fully described [`Cell`], or say precisely why not via
//!   [`CellResult`]. Both traversal strategies share this one pipeline.
//!
//! Session state
//! - [`CellConstraints`] carries the limits plus the per-session dedup sets
//!   (behind `RwLock`s so parallel seed walks can share one instance), an
//!   optional hole tester, and a back-reference to the wrapper cell.
//!
//! Layout
//! - `types.rs` (Cell, CellResult), `constraints.rs` (limits, dedup sets, holes),
//!   `hash.rs` (rotation/direction-invariant loop hashing), `validate.rs`
//!   (geometry + ordered checks).

mod constraints;
mod hash;
mod types;
mod validate;

pub use constraints::{CellConstraints, HoleTester, Limit, PointHoles};
pub use hash::{canonical_nodes, cell_hash, start_edge_key};
pub use types::{Cell, CellResult};
pub use validate::validate_nodes;
