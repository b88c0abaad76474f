pub mod audit;
pub mod config;
pub mod departments;
pub mod history;
pub mod seo;
