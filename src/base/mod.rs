pub mod geometry;
pub mod iterate;
pub mod polynomial;
pub mod shapes;
