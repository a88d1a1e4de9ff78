// アプリケーション層モジュール
pub mod add_handler;
pub mod get_handler;
pub mod list_handler;
pub mod remove_handler;
pub mod request_params;
pub mod responses;

// 再エクスポート
pub use add_handler::AddExpenseHandler;
pub use get_handler::GetExpenseHandler;
pub use list_handler::ListExpensesHandler;
pub use remove_handler::RemoveExpenseHandler;
pub use request_params::ParamError;
