//! Entanglement graph: squares as nodes, live quantum moves as edges.
//!
//! The board keeps the graph up to date move by move:
//! - `insert` runs the cycle test and adds the edge
//! - `resolve` computes a collapse without touching the graph
//! - `detach` / `attach` apply and revert a collapse

mod collapse;
mod entanglement;

pub use collapse::Resolution;
pub use entanglement::{Edge, EntanglementGraph};
