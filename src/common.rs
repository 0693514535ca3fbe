pub mod index_map;
pub mod matrix;

pub use index_map::NodeIndexMap;
pub use matrix::Matrix;
