//! LetterGraph - 链表存储的有向字母图
//!
//! 顶点以单个字符为标签（矩阵行号从 `A` 起递增），邻接关系保存在两层链表中：
//! - 按插入顺序链接的顶点链表
//! - 每个顶点自己的有序出边列表
//!
//! 另外提供邻接矩阵文件加载和交互式菜单会话。

pub mod cli;
pub mod error;
pub mod graph;
pub mod import;
pub mod types;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{Edge, Graph, GraphSnapshot, Vertex, VertexId, VertexSnapshot};
pub use import::{load_matrix, MatrixLoader};
pub use types::AdjacencyMatrix;

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
