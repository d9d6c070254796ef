pub mod cable;
pub mod catenary;
pub mod catenary_solver;
pub mod line_cable;
pub mod unit_loads;
pub mod weather;
