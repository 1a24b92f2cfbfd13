//! 链表字母图的性质测试

use lettergraph::{Error, Graph};
use proptest::prelude::*;

fn square_matrix(max: usize) -> impl Strategy<Value = Vec<Vec<u8>>> {
    (1..=max).prop_flat_map(|n| prop::collection::vec(prop::collection::vec(0u8..=1, n), n))
}

#[derive(Debug, Clone)]
enum Op {
    Add(char, Vec<char>),
    Delete(char),
    AddEdge(char, char),
}

fn letter() -> impl Strategy<Value = char> {
    (0u8..10).prop_map(|i| (b'A' + i) as char)
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (letter(), prop::collection::vec(letter(), 0..5)).prop_map(|(l, c)| Op::Add(l, c)),
        letter().prop_map(Op::Delete),
        (letter(), letter()).prop_map(|(s, t)| Op::AddEdge(s, t)),
    ]
}

/// 每条边都必须指向仍在链表中的顶点
fn assert_structure(g: &Graph) {
    let walked: Vec<_> = g.vertices().collect();
    assert_eq!(walked.len(), g.vertex_count());
    assert_eq!(g.is_empty(), walked.is_empty());

    let ids: Vec<_> = walked.iter().map(|(id, _)| *id).collect();
    for (_, v) in &walked {
        for e in v.edges() {
            assert!(ids.contains(&e.target()), "悬空边: {}", v.label());
        }
    }

    let mut labels = g.labels();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), g.vertex_count(), "标签重复");
}

proptest! {
    #[test]
    fn build_round_trip(matrix in square_matrix(40)) {
        let g = Graph::from_matrix(&matrix).unwrap();
        let n = matrix.len();

        let expected: Vec<char> = (0..n)
            .map(|i| char::from_u32('A' as u32 + i as u32).unwrap())
            .collect();
        prop_assert_eq!(g.labels(), expected.clone());

        for i in 0..n {
            for j in 0..n {
                prop_assert_eq!(g.find_edge(expected[i], expected[j]), matrix[i][j] == 1);
            }
            // 出边按目标标签升序
            let targets: Vec<char> = (0..n)
                .filter(|&j| matrix[i][j] == 1)
                .map(|j| expected[j])
                .collect();
            prop_assert_eq!(g.neighbors(expected[i]).unwrap(), targets);
        }

        let ones: usize = matrix.iter().flatten().filter(|&&c| c == 1).count();
        prop_assert_eq!(g.count_edges(), ones);
    }

    #[test]
    fn operations_preserve_structure(
        matrix in square_matrix(6),
        ops in prop::collection::vec(op(), 0..40),
    ) {
        let mut g = Graph::from_matrix(&matrix).unwrap();
        assert_structure(&g);

        for op in ops {
            let before = g.vertex_count();
            match op {
                Op::Add(label, connected) => {
                    let existed = g.find_vertex(label).is_some();
                    let was_empty = g.is_empty();
                    match g.add_vertex(label, &connected) {
                        Ok(_) => {
                            prop_assert!(!existed);
                            prop_assert_eq!(g.vertex_count(), before + 1);
                            prop_assert_eq!(g.labels().last().copied(), Some(label));

                            let expected: Vec<char> = if was_empty {
                                Vec::new()
                            } else {
                                connected
                                    .iter()
                                    .copied()
                                    .filter(|&c| g.find_vertex(c).is_some())
                                    .collect()
                            };
                            prop_assert_eq!(g.neighbors(label).unwrap(), expected);
                        }
                        Err(Error::DuplicateVertex(l)) => {
                            prop_assert!(existed);
                            prop_assert_eq!(l, label);
                            prop_assert_eq!(g.vertex_count(), before);
                        }
                        Err(e) => prop_assert!(false, "意外错误: {}", e),
                    }
                }
                Op::Delete(label) => match g.delete_vertex(label) {
                    Ok(()) => {
                        prop_assert_eq!(g.vertex_count(), before - 1);
                        prop_assert!(g.find_vertex(label).is_none());
                        for other in g.labels() {
                            prop_assert!(!g.find_edge(other, label));
                            prop_assert!(!g.find_edge(label, other));
                        }
                    }
                    Err(Error::EmptyGraph) => prop_assert_eq!(before, 0),
                    Err(Error::VertexNotFound(l)) => {
                        prop_assert_eq!(l, label);
                        prop_assert_eq!(g.vertex_count(), before);
                    }
                    Err(e) => prop_assert!(false, "意外错误: {}", e),
                },
                Op::AddEdge(source, target) => {
                    let edges = g.count_edges();
                    let existed = g.find_edge(source, target);
                    match g.add_edge(source, target) {
                        Ok(()) => {
                            prop_assert!(!existed);
                            prop_assert_eq!(g.count_edges(), edges + 1);
                            prop_assert_eq!(g.neighbors(source).unwrap().first().copied(), Some(target));
                        }
                        Err(_) => prop_assert_eq!(g.count_edges(), edges),
                    }
                }
            }
            assert_structure(&g);
        }
    }

    #[test]
    fn lookups_are_idempotent(matrix in square_matrix(8), s in letter(), t in letter()) {
        let g = Graph::from_matrix(&matrix).unwrap();
        let rendered = g.render_detailed();

        let first = (g.find_vertex(s), g.find_edge(s, t));
        for _ in 0..3 {
            prop_assert_eq!((g.find_vertex(s), g.find_edge(s, t)), first);
        }
        prop_assert_eq!(g.render_detailed(), rendered);
    }
}

#[test]
fn scenario_add_then_delete() {
    let mut g = Graph::from_matrix(&[vec![0, 1], vec![0, 0]]).unwrap();

    g.add_vertex('C', &['A']).unwrap();
    assert_eq!(g.vertex_count(), 3);
    assert!(g.find_edge('C', 'A'));

    g.delete_vertex('A').unwrap();
    assert_eq!(g.vertex_count(), 2);
    assert!(g.find_vertex('A').is_none());
    assert!(!g.find_edge('C', 'A'));
    assert_eq!(g.labels(), vec!['B', 'C']);
}

#[test]
fn scenario_errors() {
    let mut g = Graph::from_matrix(&[vec![0, 1], vec![0, 0]]).unwrap();

    assert!(matches!(g.add_vertex('B', &[]), Err(Error::DuplicateVertex('B'))));
    assert!(matches!(g.delete_vertex('Z'), Err(Error::VertexNotFound('Z'))));

    g.delete_vertex('A').unwrap();
    g.delete_vertex('B').unwrap();
    assert!(matches!(g.delete_vertex('B'), Err(Error::EmptyGraph)));
}
