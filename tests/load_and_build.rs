use lettergraph::cli::{ScriptedInput, Session};
use lettergraph::{load_matrix, Graph, MatrixLoader};
use std::io::{Cursor, Write};
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn test_bundled_matrix() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/graph_matrix.txt");
    let matrix = load_matrix(path).unwrap();
    let g = Graph::from_matrix(&matrix).unwrap();

    assert_eq!(g.labels(), vec!['A', 'B', 'C', 'D', 'E']);
    assert_eq!(g.count_edges(), 7);
    assert_eq!(g.neighbors('D'), Some(vec!['A', 'E']));
    assert_eq!(g.neighbors('E'), Some(vec![]));
}

#[test]
fn test_file_to_session() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "3").unwrap();
    writeln!(file, "0 1 0").unwrap();
    writeln!(file, "0 0 1").unwrap();
    writeln!(file, "1 0 0").unwrap();

    let graph = Graph::from_matrix(&load_matrix(file.path()).unwrap()).unwrap();
    let mut session = Session::new(graph);
    let mut input = ScriptedInput::new(Cursor::new("1\nD\nC\nA\n\n2\nB\nyes\n5\n6\n"));
    let mut out = Vec::new();
    session.run(&mut input, &mut out).unwrap();

    let g = session.graph();
    assert_eq!(g.labels(), vec!['A', 'C', 'D']);
    assert_eq!(g.neighbors('A'), Some(vec![]));
    assert_eq!(g.neighbors('D'), Some(vec!['C', 'A']));

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Vertices: 3\nEdges: 3\n"));
    assert!(out.contains("    D -> C\n    D -> A\n"));
}

#[test]
fn test_loaded_matrix_beyond_alphabet() {
    let n = 27;
    let mut text = format!("{}\n", n);
    for i in 0..n {
        let row: Vec<&str> = (0..n)
            .map(|j| if j == (i + 1) % n { "1" } else { "0" })
            .collect();
        text.push_str(&row.join(" "));
        text.push('\n');
    }

    let matrix = MatrixLoader::new().parse(&text).unwrap();
    let g = Graph::from_matrix(&matrix).unwrap();

    assert_eq!(g.vertex_count(), 27);
    assert_eq!(g.labels()[26], '[');
    assert!(g.find_edge('[', 'A'));
    assert_eq!(g.count_edges(), 27);
}
