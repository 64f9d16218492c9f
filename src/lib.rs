pub mod error;
pub mod graph;
pub mod input;
pub mod queue;
pub mod utils;

pub use graph::topology_sort::{Schedule, can_finish, find_order, schedule};
pub use queue::Queue;
