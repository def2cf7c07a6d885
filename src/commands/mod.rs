pub mod current;
pub mod list;
pub mod switch;
