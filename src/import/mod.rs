//! 数据导入模块
//!
//! 从文本文件读取邻接矩阵。文件格式：第一行是矩阵边长 n，
//! 之后 n 行，每行 n 个以空白分隔的 0 或 1。

use crate::error::{Error, Result};
use crate::types::AdjacencyMatrix;
use std::fs;
use std::path::Path;
use tracing::debug;

/// 默认允许的最大矩阵边长
pub const DEFAULT_MAX_SIZE: usize = 1000;

/// 邻接矩阵加载器
#[derive(Debug, Clone)]
pub struct MatrixLoader {
    max_size: usize,
}

impl Default for MatrixLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixLoader {
    /// 创建加载器
    pub fn new() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
        }
    }

    /// 设置最大矩阵边长
    pub fn with_max_size(mut self, size: usize) -> Self {
        self.max_size = size;
        self
    }

    /// 从文件加载
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<AdjacencyMatrix> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let matrix = self.parse(&content)?;
        debug!(path = %path.display(), size = matrix.len(), "adjacency matrix loaded");
        Ok(matrix)
    }

    /// 解析矩阵文本
    pub fn parse(&self, content: &str) -> Result<AdjacencyMatrix> {
        let mut lines = content.lines().skip_while(|l| l.trim().is_empty());

        let header = lines
            .next()
            .ok_or_else(|| Error::Import("file is empty".to_string()))?;
        let n = header
            .trim()
            .parse::<usize>()
            .map_err(|_| Error::Import(format!("invalid matrix size: {:?}", header.trim())))?;
        if n == 0 || n > self.max_size {
            return Err(Error::Import(format!(
                "matrix size {} out of range 1..={}",
                n, self.max_size
            )));
        }

        let mut matrix = Vec::with_capacity(n);
        for row in 1..=n {
            let line = lines
                .next()
                .ok_or_else(|| Error::Import(format!("expected {} rows, found {}", n, row - 1)))?;
            matrix.push(Self::parse_row(line, row, n)?);
        }

        Ok(matrix)
    }

    /// 解析单行，`row` 从 1 开始
    fn parse_row(line: &str, row: usize, n: usize) -> Result<Vec<u8>> {
        let elements: Vec<&str> = line.split_whitespace().collect();
        if elements.len() != n {
            return Err(Error::Import(format!(
                "row {} has {} elements, expected {}",
                row,
                elements.len(),
                n
            )));
        }

        elements
            .iter()
            .map(|e| match e.parse::<i64>() {
                Ok(0) => Ok(0),
                Ok(1) => Ok(1),
                Ok(v) => Err(Error::Import(format!(
                    "row {}: element must be 0 or 1, got {}",
                    row, v
                ))),
                Err(_) => Err(Error::Import(format!(
                    "row {}: invalid number {:?}",
                    row, e
                ))),
            })
            .collect()
    }
}

/// 从文件加载邻接矩阵
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<AdjacencyMatrix> {
    MatrixLoader::new().load(path)
}
