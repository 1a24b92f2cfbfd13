//! 顶点定义
//!
//! 顶点保存标签、按插入顺序排列的出边列表，以及指向顶点链表中下一个顶点的链接

use super::edge::Edge;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点 ID（顶点槽位的下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 顶点
#[derive(Debug, Clone)]
pub struct Vertex {
    /// 顶点标签
    label: char,
    /// 出边列表（按插入顺序）
    edges: Vec<Edge>,
    /// 顶点链表中的下一个顶点
    next: Option<VertexId>,
}

impl Vertex {
    /// 创建没有出边、尚未链接的顶点
    pub fn new(label: char) -> Self {
        Self {
            label,
            edges: Vec::new(),
            next: None,
        }
    }

    /// 获取顶点标签
    pub fn label(&self) -> char {
        self.label
    }

    /// 获取出边列表
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// 出度
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    /// 下一个顶点
    pub fn next(&self) -> Option<VertexId> {
        self.next
    }

    /// 是否存在指向 `target` 的边
    pub fn has_edge_to(&self, target: VertexId) -> bool {
        self.edges.iter().any(|e| e.target() == target)
    }

    pub(crate) fn set_next(&mut self, next: Option<VertexId>) {
        self.next = next;
    }

    /// 追加到出边列表尾部
    pub(crate) fn push_edge(&mut self, target: VertexId) {
        self.edges.push(Edge::new(target));
    }

    /// 插入到出边列表头部
    pub(crate) fn prepend_edge(&mut self, target: VertexId) {
        self.edges.insert(0, Edge::new(target));
    }

    /// 移除所有指向 `target` 的边，保持其余边的相对顺序
    ///
    /// 返回移除的边数。
    pub(crate) fn remove_edges_to(&mut self, target: VertexId) -> usize {
        let before = self.edges.len();
        self.edges.retain(|e| e.target() != target);
        before - self.edges.len()
    }
}
