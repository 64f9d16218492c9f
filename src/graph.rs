pub mod topology_sort;

#[allow(unused)]
use tracing::{debug, trace};

type Range = usize;

/// Directed graph over the vertices `0..vertices`, as an adjacency list plus
/// the in-degree of every vertex.
///
/// Edges keep the order they were added in, and parallel edges are kept:
/// adding `a -> b` twice gives `b` an in-degree of 2.
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: usize,
    adjacency_list: Vec<Vec<Range>>,
    in_degree: Vec<usize>,
}

impl Graph {
    pub fn new(vertices: usize) -> Self {
        Graph {
            vertices,
            adjacency_list: vec![Vec::new(); vertices],
            in_degree: vec![0; vertices],
        }
    }

    /// Build the graph of `[dependent, prerequisite]` pairs: each pair becomes
    /// the edge `prerequisite -> dependent`.
    ///
    /// # Panics
    /// If a course id is not below `num_courses`.
    pub fn from_prerequisites(num_courses: usize, prerequisites: &[[usize; 2]]) -> Self {
        let mut graph = Graph::new(num_courses);
        for &[dependent, prerequisite] in prerequisites {
            graph.add_edge(prerequisite, dependent);
        }
        graph
    }

    pub fn add_edge(&mut self, from: Range, to: Range) {
        self.adjacency_list[from].push(to);
        self.in_degree[to] += 1;
    }

    pub fn vertices(&self) -> usize {
        self.vertices
    }

    /// Vertices directly enabled by `vertex`, in the order the edges were added.
    pub fn successors(&self, vertex: Range) -> &[Range] {
        &self.adjacency_list[vertex]
    }

    pub fn in_degrees(&self) -> &[usize] {
        &self.in_degree
    }

    pub fn dump_graph(&self) {
        debug!("Graph of {} vertices:", self.vertices);
        for (index, row) in self.adjacency_list.iter().enumerate() {
            let edges: Vec<String> = row.iter().map(|edge| edge.to_string()).collect();
            trace!("{}: -> [{}] in-degree {}", index, edges.join(" "), self.in_degree[index]);
        }
    }
}
