pub mod catalog;
pub mod empty;
pub mod item;
pub mod quiz;
