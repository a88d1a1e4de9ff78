/// 経費取得ハンドラー
///
/// 経費IDを指定して1件を返却する。
use lambda_http::{Body, Error, Request, Response};
use tracing::info;

use crate::application::request_params::{self, ID_PARAM};
use crate::application::responses;
use crate::infrastructure::ExpenseRepository;

/// 経費IDで1件を取得するハンドラー
pub struct GetExpenseHandler<R: ExpenseRepository> {
    /// 経費リポジトリ
    repository: R,
}

impl<R: ExpenseRepository> GetExpenseHandler<R> {
    /// 新しいGetExpenseHandlerを作成
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// 取得リクエストを処理
    ///
    /// # 処理フロー
    /// 1. `Id`パラメータをパス→クエリの順で解決（欠落時は400）
    /// 2. リポジトリから取得
    /// 3. 見つからなければ404（空ボディ）、見つかれば200 + JSON
    ///
    /// リポジトリのエラーは呼び出し元（Lambdaランタイム）へ伝播する。
    pub async fn handle(&self, request: &Request) -> Result<Response<Body>, Error> {
        let expense_id = match request_params::require_param(request, ID_PARAM) {
            Ok(expense_id) => expense_id,
            Err(error) => return responses::bad_request(error.to_string()),
        };

        info!(expense_id = %expense_id, "経費を取得");

        match self.repository.get_by_id(&expense_id).await? {
            Some(expense) => responses::json_ok(serde_json::to_string(&expense)?),
            None => {
                info!(expense_id = %expense_id, "経費が見つからない");
                responses::empty(404)
            }
        }
    }
}
