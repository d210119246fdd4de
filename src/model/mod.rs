//! # Graph Model
//!
//! Plain DTOs shared by the graph container, the calculators and the reports.
//!
//! Design rule: this module is pure data with no I/O, state or progress
//! reporting.

pub mod vertex;
pub mod edge;
pub mod group;
pub mod pair_key;

pub use vertex::{Vertex, VertexId};
pub use edge::{Directedness, Edge, EdgeId};
pub use group::GroupInfo;
pub use pair_key::VertexPairKey;
