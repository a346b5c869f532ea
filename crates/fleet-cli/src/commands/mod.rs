pub mod assets;
pub mod catalog;
pub mod checklist;
pub mod dashboard;
pub mod defect;
pub mod dispatch;
pub mod fleet;
pub mod history;
pub mod login;
pub mod maintenance;
pub mod operators;
pub mod request;
pub mod shared;
