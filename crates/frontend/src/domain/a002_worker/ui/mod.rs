pub mod list;
pub mod select;
