//! 边定义
//!
//! 边只记录目标顶点，不拥有目标；源顶点由所在的出边列表决定

use crate::graph::vertex::VertexId;
use serde::{Deserialize, Serialize};

/// 边
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// 目标顶点 ID
    target: VertexId,
}

impl Edge {
    /// 创建新边
    pub fn new(target: VertexId) -> Self {
        Self { target }
    }

    /// 获取目标顶点 ID
    pub fn target(&self) -> VertexId {
        self.target
    }
}
