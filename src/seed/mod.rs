pub mod dto;
pub mod error;
pub mod plan;
pub mod services;

pub use plan::BatchPlan;
pub use services::seed_users;
