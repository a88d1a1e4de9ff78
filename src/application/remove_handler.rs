/// 経費削除ハンドラー
///
/// 経費IDを指定して削除する。削除は冪等で、存在しないIDでも成功する。
use lambda_http::{Body, Error, Request, Response};
use tracing::info;

use crate::application::request_params::{self, ID_PARAM};
use crate::application::responses;
use crate::infrastructure::ExpenseRepository;

/// 経費を削除するハンドラー
pub struct RemoveExpenseHandler<R: ExpenseRepository> {
    /// 経費リポジトリ
    repository: R,
}

impl<R: ExpenseRepository> RemoveExpenseHandler<R> {
    /// 新しいRemoveExpenseHandlerを作成
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// 削除リクエストを処理
    ///
    /// # 処理フロー
    /// 1. `Id`パラメータをパス→クエリの順で解決（欠落時は400）
    /// 2. リポジトリから削除（存在しないIDでも成功）
    /// 3. 200（空ボディ）を返却
    ///
    /// リポジトリのエラーは呼び出し元（Lambdaランタイム）へ伝播する。
    pub async fn handle(&self, request: &Request) -> Result<Response<Body>, Error> {
        let expense_id = match request_params::require_param(request, ID_PARAM) {
            Ok(expense_id) => expense_id,
            Err(error) => return responses::bad_request(error.to_string()),
        };

        info!(expense_id = %expense_id, "経費を削除");

        self.repository.delete(&expense_id).await?;

        responses::empty(200)
    }
}
