pub mod page;
pub mod predict;
