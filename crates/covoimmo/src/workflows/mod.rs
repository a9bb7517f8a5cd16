pub mod colocation;
pub mod listings;
