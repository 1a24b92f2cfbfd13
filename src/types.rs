//! 通用类型定义

/// 邻接矩阵（行优先，元素为 0/1）
pub type AdjacencyMatrix = Vec<Vec<u8>>;

/// 第一个顶点的标签
pub const FIRST_LABEL: char = 'A';

/// 第 `index` 行对应的顶点标签
///
/// 超过 `'Z'` 后继续沿码位递增（`'['`、`'\\'`……）；
/// 只有落入代理区等非法码位时返回 `None`。
pub fn label_for_index(index: usize) -> Option<char> {
    let offset = u32::try_from(index).ok()?;
    char::from_u32((FIRST_LABEL as u32).checked_add(offset)?)
}

/// 解析用户输入的标签
///
/// 去除空白并转为大写；只接受恰好一个字母。
pub fn parse_label(input: &str) -> Option<char> {
    let mut chars = input.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}
