use crate::graph::Graph;
use crate::queue::Queue;

use tracing::debug;

/// Outcome of ordering a set of courses.
///
/// `order` holds every course when `feasible`, and is empty otherwise. A
/// partial order is never exposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    order: Vec<usize>,
    feasible: bool,
}

impl Schedule {
    pub fn is_feasible(&self) -> bool {
        self.feasible
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn into_order(self) -> Vec<usize> {
        self.order
    }
}

/// Performs topological sort on a directed graph using Kahn's algorithm
///
/// Vertices with no incoming edges are seeded in ascending order, the rest
/// are queued in the order their last incoming edge was consumed, so the
/// result is deterministic for a given graph.
///
/// # Returns
/// * `Some(Vec<usize>)` - Topologically sorted order if graph is acyclic
/// * `None` - If graph contains a cycle
pub fn topological_sort(graph: &Graph) -> Option<Vec<usize>> {
    let mut in_degree = graph.in_degrees().to_vec();

    // Initialize queue with vertices having in-degree 0
    let mut queue: Queue<usize> = (0..graph.vertices())
        .filter(|&vertex| in_degree[vertex] == 0)
        .collect();
    debug!("seed vertices: {}", queue);

    let mut result = Vec::with_capacity(graph.vertices());

    while let Some(u) = queue.dequeue() {
        result.push(u);

        for &v in graph.successors(u) {
            in_degree[v] -= 1;
            if in_degree[v] == 0 {
                queue.enqueue(v);
            }
        }
    }

    // each remaining in-degree is an edge from a vertex on (or behind) a cycle
    if in_degree.iter().all(|&degree| degree == 0) {
        Some(result)
    } else {
        debug!(
            "cycle: {} of {} vertices never became free",
            graph.vertices() - result.len(),
            graph.vertices()
        );
        None
    }
}

/// Order `num_courses` courses given `[dependent, prerequisite]` pairs.
///
/// One traversal answers both "can all be finished" and "in which order".
///
/// # Panics
/// If a course id in `prerequisites` is not below `num_courses`.
pub fn schedule(num_courses: usize, prerequisites: &[[usize; 2]]) -> Schedule {
    let graph = Graph::from_prerequisites(num_courses, prerequisites);
    graph.dump_graph();

    match topological_sort(&graph) {
        Some(order) => Schedule {
            order,
            feasible: true,
        },
        None => Schedule {
            order: Vec::new(),
            feasible: false,
        },
    }
}

/// A valid order of all courses, or an empty vector if there is none.
///
/// Empty is also the answer for `num_courses == 0`; use [`schedule`] or
/// [`can_finish`] to tell the two apart.
pub fn find_order(num_courses: usize, prerequisites: &[[usize; 2]]) -> Vec<usize> {
    schedule(num_courses, prerequisites).into_order()
}

pub fn can_finish(num_courses: usize, prerequisites: &[[usize; 2]]) -> bool {
    schedule(num_courses, prerequisites).is_feasible()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_dag() {
        // Graph: 0 -> 1 -> 2
        //        0 -> 2
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1);
        graph.add_edge(0, 2);
        graph.add_edge(1, 2);

        let result = topological_sort(&graph).unwrap();
        assert_eq!(result, vec![0, 1, 2]);
    }

    #[test]
    fn test_cycle_detection() {
        // Graph with cycle: 0 -> 1 -> 2 -> 0
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(2, 0);

        assert!(topological_sort(&graph).is_none());
    }

    #[test]
    fn test_disconnected_components() {
        // Two disconnected components: 0->1 and 2->3
        let mut graph = Graph::new(4);
        graph.add_edge(0, 1);
        graph.add_edge(2, 3);

        let result = topological_sort(&graph).unwrap();
        // seeds 0 and 2 first, then what they free, in that order
        assert_eq!(result, vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_successor_order_decides_ties() {
        // 3 frees 1 before 0
        let mut graph = Graph::new(4);
        graph.add_edge(3, 1);
        graph.add_edge(3, 0);
        graph.add_edge(2, 3);

        assert_eq!(topological_sort(&graph).unwrap(), vec![2, 3, 1, 0]);
    }

    #[test]
    fn test_schedule_reports_both() {
        let ok = schedule(2, &[[1, 0]]);
        assert!(ok.is_feasible());
        assert_eq!(ok.order(), &[0, 1]);

        let cyclic = schedule(2, &[[1, 0], [0, 1]]);
        assert!(!cyclic.is_feasible());
        assert!(cyclic.order().is_empty());
    }

    #[test]
    fn test_no_courses_is_feasible() {
        let empty = schedule(0, &[]);
        assert!(empty.is_feasible());
        assert!(empty.into_order().is_empty());
        assert!(can_finish(0, &[]));
    }

    #[test]
    fn test_self_loop_is_cycle() {
        assert!(!can_finish(3, &[[1, 0], [2, 2]]));
        assert!(find_order(3, &[[1, 0], [2, 2]]).is_empty());
    }

    #[test]
    fn test_cycle_downstream_hides_partial() {
        // 0 is free, but 1 <-> 2 never is
        assert_eq!(find_order(3, &[[1, 0], [1, 2], [2, 1]]), Vec::<usize>::new());
    }

    #[test]
    fn test_duplicate_prerequisite() {
        assert_eq!(find_order(2, &[[1, 0], [1, 0]]), vec![0, 1]);
    }
}
