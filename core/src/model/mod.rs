pub mod decision;
pub mod settings;
pub mod subject;
