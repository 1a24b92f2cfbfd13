//! 图数据结构
//!
//! 顶点存放在按下标寻址的槽位中，通过 `next` 链接成插入顺序的顶点链表；
//! 每个顶点持有自己的有序出边列表。图是顶点的唯一所有者，
//! 所有对顶点链表和出边列表的修改都经由这里的操作完成。

use super::vertex::{Vertex, VertexId};
use crate::error::{Error, Result};
use crate::types::label_for_index;
use tracing::{debug, trace};

/// 有向字母图
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// 顶点槽位，已删除的槽位为 `None`
    slots: Vec<Option<Vertex>>,
    /// 可复用的空闲槽位
    free: Vec<VertexId>,
    /// 顶点链表头
    first: Option<VertexId>,
    /// 顶点数量
    count: usize,
}

/// 按链表顺序遍历顶点
pub struct Vertices<'a> {
    graph: &'a Graph,
    cursor: Option<VertexId>,
}

impl<'a> Iterator for Vertices<'a> {
    type Item = (VertexId, &'a Vertex);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let vertex = self.graph.vertex(id)?;
        self.cursor = vertex.next();
        Some((id, vertex))
    }
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 从邻接矩阵构建图
    ///
    /// 第 i 行对应标签为 `'A' + i` 的顶点；`matrix[i][j] == 1` 时在顶点 i
    /// 的出边列表尾部追加一条指向顶点 j 的边，列顺序即出边顺序。
    /// 不检查元素是否只有 0/1，也不去重。
    pub fn from_matrix(matrix: &[Vec<u8>]) -> Result<Self> {
        let n = matrix.len();
        if n == 0 {
            return Err(Error::InvalidInput("matrix must not be empty".to_string()));
        }
        if let Some((i, row)) = matrix.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(Error::InvalidInput(format!(
                "matrix is not square: row {} has {} columns, expected {}",
                i + 1,
                row.len(),
                n
            )));
        }
        let mut slots = Vec::with_capacity(n);
        for (i, row) in matrix.iter().enumerate() {
            let label = label_for_index(i).ok_or_else(|| {
                Error::InvalidInput(format!("no vertex label for row {}", i + 1))
            })?;
            let mut vertex = Vertex::new(label);
            if i + 1 < n {
                vertex.set_next(Some(VertexId::new(i + 1)));
            }
            for (j, _) in row.iter().enumerate().filter(|&(_, &cell)| cell == 1) {
                vertex.push_edge(VertexId::new(j));
            }
            slots.push(Some(vertex));
        }

        let graph = Self {
            slots,
            free: Vec::new(),
            first: Some(VertexId::new(0)),
            count: n,
        };
        debug!(
            vertices = graph.count,
            edges = graph.count_edges(),
            "graph built from adjacency matrix"
        );
        Ok(graph)
    }

    // ==================== 基本信息 ====================

    /// 顶点数量
    pub fn vertex_count(&self) -> usize {
        self.count
    }

    /// 是否为空图
    pub fn is_empty(&self) -> bool {
        self.first.is_none() || self.count == 0
    }

    /// 顶点链表头
    pub fn first(&self) -> Option<VertexId> {
        self.first
    }

    /// 获取顶点
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// 按链表顺序遍历顶点
    pub fn vertices(&self) -> Vertices<'_> {
        Vertices {
            graph: self,
            cursor: if self.is_empty() { None } else { self.first },
        }
    }

    /// 按链表顺序列出顶点标签
    pub fn labels(&self) -> Vec<char> {
        self.vertices().map(|(_, v)| v.label()).collect()
    }

    // ==================== 查找 ====================

    /// 按标签查找顶点
    pub fn find_vertex(&self, label: char) -> Option<VertexId> {
        let found = self
            .vertices()
            .find(|(_, v)| v.label() == label)
            .map(|(id, _)| id);
        trace!(%label, found = found.is_some(), "find vertex");
        found
    }

    /// 是否存在 `source -> target` 的边
    ///
    /// 任一标签不存在时返回 `false`。
    pub fn find_edge(&self, source: char, target: char) -> bool {
        let (Some(src), Some(dst)) = (self.find_vertex(source), self.find_vertex(target)) else {
            return false;
        };
        self.vertex(src).map_or(false, |v| v.has_edge_to(dst))
    }

    /// 顶点的出边目标标签（按出边顺序）
    pub fn neighbors(&self, label: char) -> Option<Vec<char>> {
        let id = self.find_vertex(label)?;
        let vertex = self.vertex(id)?;
        Some(
            vertex
                .edges()
                .iter()
                .filter_map(|e| self.vertex(e.target()).map(Vertex::label))
                .collect(),
        )
    }

    /// 顶点的出度
    pub fn out_degree(&self, label: char) -> Option<usize> {
        let id = self.find_vertex(label)?;
        self.vertex(id).map(Vertex::out_degree)
    }

    /// 边总数
    pub fn count_edges(&self) -> usize {
        self.vertices().map(|(_, v)| v.out_degree()).sum()
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    ///
    /// 新顶点追加到顶点链表尾部，随后按给定顺序为 `connected` 中能解析到的
    /// 标签追加出边；解析不到的标签直接跳过。空图时新顶点成为表头，
    /// 忽略 `connected`。不会创建指向新顶点的入边。
    pub fn add_vertex(&mut self, label: char, connected: &[char]) -> Result<VertexId> {
        if self.find_vertex(label).is_some() {
            return Err(Error::DuplicateVertex(label));
        }

        if self.is_empty() {
            let id = self.allocate(Vertex::new(label));
            self.first = Some(id);
            self.count = 1;
            debug!(%label, "vertex added to empty graph");
            return Ok(id);
        }

        let tail = self.last_vertex();
        let id = self.allocate(Vertex::new(label));
        if let Some(last) = tail.and_then(|t| self.vertex_mut(t)) {
            last.set_next(Some(id));
        }

        // 新顶点已链接，连接列表中出现自身标签时会解析为自环
        let targets: Vec<VertexId> = connected
            .iter()
            .filter_map(|&l| self.find_vertex(l))
            .collect();
        let skipped = connected.len() - targets.len();
        if let Some(vertex) = self.vertex_mut(id) {
            for target in targets {
                vertex.push_edge(target);
            }
        }

        self.count += 1;
        debug!(%label, skipped, vertices = self.count, "vertex added");
        Ok(id)
    }

    /// 删除顶点
    ///
    /// 先从顶点链表中摘除，再清除其余所有顶点中指向它的边。
    /// 被删顶点自身的出边随顶点一起丢弃。
    pub fn delete_vertex(&mut self, label: char) -> Result<()> {
        if self.is_empty() {
            return Err(Error::EmptyGraph);
        }
        let target = self
            .find_vertex(label)
            .ok_or(Error::VertexNotFound(label))?;

        let next = self.vertex(target).and_then(Vertex::next);
        if self.first == Some(target) {
            self.first = next;
        } else if let Some(pred) = self.predecessor_of(target) {
            if let Some(v) = self.vertex_mut(pred) {
                v.set_next(next);
            }
        }

        let removed = self.slots.get_mut(target.index()).and_then(Option::take);
        let dropped_out = removed.map_or(0, |v| v.out_degree());

        let mut swept = 0;
        let mut cursor = self.first;
        while let Some(id) = cursor {
            let Some(vertex) = self.vertex_mut(id) else {
                break;
            };
            swept += vertex.remove_edges_to(target);
            cursor = vertex.next();
        }

        self.free.push(target);
        self.count = self.count.saturating_sub(1);
        if self.count == 0 {
            self.first = None;
        }
        debug!(
            %label,
            incoming_removed = swept,
            outgoing_dropped = dropped_out,
            vertices = self.count,
            "vertex deleted"
        );
        Ok(())
    }

    // ==================== 边操作 ====================

    /// 添加边 `source -> target`
    ///
    /// 新边插入到源顶点出边列表的头部。已存在相同的边时报错。
    pub fn add_edge(&mut self, source: char, target: char) -> Result<()> {
        if self.is_empty() {
            return Err(Error::EmptyGraph);
        }
        let src = self
            .find_vertex(source)
            .ok_or(Error::VertexNotFound(source))?;
        let dst = self
            .find_vertex(target)
            .ok_or(Error::VertexNotFound(target))?;
        if self.find_edge(source, target) {
            return Err(Error::DuplicateEdge(source, target));
        }

        if let Some(vertex) = self.vertex_mut(src) {
            vertex.prepend_edge(dst);
        }
        debug!(%source, %target, "edge added");
        Ok(())
    }

    // ==================== 内部辅助 ====================

    fn allocate(&mut self, vertex: Vertex) -> VertexId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.index()] = Some(vertex);
                id
            }
            None => {
                self.slots.push(Some(vertex));
                VertexId::new(self.slots.len() - 1)
            }
        }
    }

    fn last_vertex(&self) -> Option<VertexId> {
        self.vertices().last().map(|(id, _)| id)
    }

    fn predecessor_of(&self, target: VertexId) -> Option<VertexId> {
        self.vertices()
            .find(|(_, v)| v.next() == Some(target))
            .map(|(id, _)| id)
    }
}
