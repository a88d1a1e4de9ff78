// Infrastructure layer modules
pub mod config;
pub mod expense_repository;
pub mod logging;

// Re-exports
pub use config::{DynamoDbConfig, DynamoDbConfigError};
pub use expense_repository::{DynamoExpenseRepository, ExpenseRepository, ExpenseRepositoryError};
pub use logging::init_logging;
