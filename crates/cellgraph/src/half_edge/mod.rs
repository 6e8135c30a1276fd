//! Half-edge table: construction and face enumeration.
//!
//! Purpose
//! - Split every undirected edge into two directed halves stored in one flat
//!   `Vec`, linked by index (`twin`, `next`, `face`), and partition the halves
//!   into closed face traces.
//!
//! Rule
//! - Outgoing halves of each node are sorted by polar angle. For `h = u→v`,
//!   `next(h)` is the half stored right after `twin(h)` in `v`'s sorted list
//!   (wrapping). Tracing `next` then walks every face exactly once; bounded
//!   faces come out with negative signed area, each component's exterior with
//!   positive signed area.
//!
//! Layout
//! - `types.rs` (table and face types), `build.rs` (angle sort and linkage),
//!   `faces.rs` (trace enumeration).

mod build;
mod faces;
mod types;

pub use build::build_half_edges;
pub use faces::enumerate_faces;
pub use types::{Face, FaceSet, HalfEdge, HalfEdgeTable};

#[cfg(test)]
mod tests;
