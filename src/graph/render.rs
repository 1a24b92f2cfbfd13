//! 图的文本输出与快照
//!
//! 顶点按链表顺序、出边按列表顺序输出，结果是确定的

use super::graph::Graph;
use super::vertex::Vertex;
use serde::{Deserialize, Serialize};
use std::fmt;

const EMPTY_GRAPH: &str = "Graph is empty\n";

/// 顶点快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexSnapshot {
    pub label: char,
    pub edges: Vec<char>,
}

/// 图快照（只读视图，用于 JSON 输出）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub vertices: Vec<VertexSnapshot>,
}

impl GraphSnapshot {
    /// 序列化为 JSON
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Graph {
    fn target_labels(&self, vertex: &Vertex) -> Vec<char> {
        vertex
            .edges()
            .iter()
            .filter_map(|e| self.vertex(e.target()).map(Vertex::label))
            .collect()
    }

    /// 简要结构：每行一个顶点及其出边目标
    pub fn render(&self) -> String {
        if self.is_empty() {
            return EMPTY_GRAPH.to_string();
        }

        let mut output = String::from("Graph structure\n");
        output.push_str(&format!("Vertices: {}\n", self.vertex_count()));
        for (_, vertex) in self.vertices() {
            let targets = self.target_labels(vertex);
            if targets.is_empty() {
                output.push_str(&format!("{} -> (no edges)\n", vertex.label()));
            } else {
                let joined: Vec<String> = targets.iter().map(char::to_string).collect();
                output.push_str(&format!("{} -> {}\n", vertex.label(), joined.join(", ")));
            }
        }
        output
    }

    /// 详细信息：边总数以及每条边单独一行
    pub fn render_detailed(&self) -> String {
        if self.is_empty() {
            return EMPTY_GRAPH.to_string();
        }

        let mut output = String::from("Graph details\n");
        output.push_str(&format!("Vertices: {}\n", self.vertex_count()));
        output.push_str(&format!("Edges: {}\n", self.count_edges()));
        for (_, vertex) in self.vertices() {
            output.push_str(&format!("\nVertex: {}\n", vertex.label()));
            let targets = self.target_labels(vertex);
            if targets.is_empty() {
                output.push_str("  Edges: none\n");
                continue;
            }
            output.push_str("  Edges:\n");
            for target in targets {
                output.push_str(&format!("    {} -> {}\n", vertex.label(), target));
            }
        }
        output
    }

    /// 生成快照
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            vertex_count: self.vertex_count(),
            edge_count: self.count_edges(),
            vertices: self
                .vertices()
                .map(|(_, v)| VertexSnapshot {
                    label: v.label(),
                    edges: self.target_labels(v),
                })
                .collect(),
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
