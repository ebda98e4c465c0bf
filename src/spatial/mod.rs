//! Spatial structures backing the packer.

pub mod occupancy;

pub use occupancy::OccupancyGrid;
