pub mod page;
pub mod slot;
