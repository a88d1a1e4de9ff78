// Domain layer modules
pub mod date_range;
pub mod expense;

// Re-exports
pub use date_range::{DateParseError, PurchaseDateRange, parse_date_time};
pub use expense::{Expense, ExpenseDraft};
