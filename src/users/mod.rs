mod corpus;
pub mod generator;
pub mod model;
pub mod repo;

pub use generator::{GeneratorConfig, RecordSource, UserGenerator};
pub use model::UserRecord;
pub use repo::{MongoUserStore, StoreError, UserStore};
