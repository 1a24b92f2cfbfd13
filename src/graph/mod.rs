//! 图核心模块
//!
//! 定义顶点、边和图的核心数据结构，以及图上的全部操作

mod edge;
mod graph;
mod render;
mod vertex;

pub use edge::Edge;
pub use graph::{Graph, Vertices};
pub use render::{GraphSnapshot, VertexSnapshot};
pub use vertex::{Vertex, VertexId};
