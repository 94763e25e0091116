pub mod graph;
pub mod parser;
pub mod search;
pub mod signature;

pub use graph::{DirType, EdgeFormat, Graph, GraphError, NodeId};
pub use parser::{ParseError, load_graph, parse_graph};
pub use search::{isomorphic, verify_isomorphism};
pub use signature::{Method, degree, distinguish, neighbour_degrees, triangle_count};
