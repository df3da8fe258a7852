pub mod category;
pub mod meal;
