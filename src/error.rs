//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("顶点已存在: {0}")]
    DuplicateVertex(char),

    #[error("顶点不存在: {0}")]
    VertexNotFound(char),

    #[error("图为空")]
    EmptyGraph,

    #[error("边已存在: {0} -> {1}")]
    DuplicateEdge(char, char),

    #[error("导入错误: {0}")]
    Import(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("行编辑器错误: {0}")]
    Readline(String),

    #[error("序列化错误: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(Error::DuplicateVertex('B').to_string(), "顶点已存在: B");
        assert_eq!(Error::VertexNotFound('Z').to_string(), "顶点不存在: Z");
        assert_eq!(Error::EmptyGraph.to_string(), "图为空");
        assert_eq!(Error::DuplicateEdge('B', 'A').to_string(), "边已存在: B -> A");
        assert_eq!(
            Error::InvalidInput("matrix is not square".into()).to_string(),
            "无效输入: matrix is not square"
        );
    }
}
