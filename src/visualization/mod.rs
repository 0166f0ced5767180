//! Visualization and plotting

pub mod speedup;
pub mod table;

pub use speedup::SpeedupPlotter;
pub use table::TimingTable;
