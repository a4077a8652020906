pub mod app;
pub mod catalog;
pub mod data;
pub mod error;
pub mod judge;
pub mod model;
pub mod quiz;
pub mod session;
pub mod ui;
pub mod view_models;

pub use app::TrainerApp;
pub use catalog::Catalog;
pub use error::{CatalogError, EngineError};
pub use session::{Action, Outcome, Session};
