pub mod traits;
pub mod matrix;
pub mod directed;
pub mod orientation;
pub mod generators;

pub use traits::Graph;
pub use matrix::WeightMatrix;
pub use directed::DirectedGraph;
pub use orientation::{fold_vertex_costs, orient, orient_ascending, UndirectedEdge};
