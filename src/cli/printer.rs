//! 结果打印器
//!
//! 以表格形式输出图的统计信息

use crate::graph::Graph;
use prettytable::{format, row, Table};

/// 打印统计信息
pub fn print_stats(graph: &Graph) -> String {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(row!["Property", "Value"]);
    table.add_row(row!["Vertex Count", graph.vertex_count().to_string()]);
    table.add_row(row!["Edge Count", graph.count_edges().to_string()]);
    table.to_string()
}

/// 打印每个顶点的出度
pub fn print_degrees(graph: &Graph) -> String {
    if graph.is_empty() {
        return String::new();
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(row!["Vertex", "Out-degree", "Targets"]);
    for (_, vertex) in graph.vertices() {
        let targets: Vec<String> = graph
            .neighbors(vertex.label())
            .unwrap_or_default()
            .iter()
            .map(char::to_string)
            .collect();
        table.add_row(row![
            vertex.label().to_string(),
            vertex.out_degree().to_string(),
            targets.join(", ")
        ]);
    }
    table.to_string()
}

/// 菜单文本
pub fn menu_text() -> String {
    r#"
1. Add vertex        (add)
2. Delete vertex     (delete)
3. Find edge         (find)
4. Show graph        (show)
5. Graph details     (details)
6. Exit              (exit)
7. Statistics        (stats)
8. Add edge          (edge)
"#
    .to_string()
}
