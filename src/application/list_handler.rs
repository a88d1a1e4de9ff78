/// 経費一覧取得ハンドラー
///
/// 購入日時による絞り込み付きで経費を全件返却する。
use lambda_http::{Body, Error, Request, Response};
use tracing::info;

use crate::application::request_params::{self, DATE_FROM_PARAM, DATE_TO_PARAM, ParamError};
use crate::application::responses;
use crate::domain::PurchaseDateRange;
use crate::infrastructure::ExpenseRepository;

/// 経費一覧を取得するハンドラー
///
/// `DateFrom`/`DateTo`パラメータ（任意、パス→クエリの順で解決）で
/// 購入日時の範囲を絞り込める。どちらもなければ全件を返す。
pub struct ListExpensesHandler<R: ExpenseRepository> {
    /// 経費リポジトリ
    repository: R,
}

impl<R: ExpenseRepository> ListExpensesHandler<R> {
    /// 新しいListExpensesHandlerを作成
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// 一覧取得リクエストを処理
    ///
    /// # 処理フロー
    /// 1. `DateFrom`/`DateTo`パラメータを解決・パース（不正な値は400）
    /// 2. リポジトリをスキャンして範囲に合致する経費を取得
    /// 3. 200 + JSON配列を返却（0件の場合は空配列）
    ///
    /// リポジトリのエラーは呼び出し元（Lambdaランタイム）へ伝播する。
    pub async fn handle(&self, request: &Request) -> Result<Response<Body>, Error> {
        let range = match Self::resolve_range(request) {
            Ok(range) => range,
            Err(error) => return responses::bad_request(error.to_string()),
        };

        info!("経費一覧を取得");

        let expenses = self.repository.scan(&range).await?;

        info!(count = expenses.len(), "経費一覧を取得完了");

        responses::json_ok(serde_json::to_string(&expenses)?)
    }

    /// リクエストから絞り込み範囲を解決する
    fn resolve_range(request: &Request) -> Result<PurchaseDateRange, ParamError> {
        let from = request_params::resolve_date_param(request, DATE_FROM_PARAM)?;
        let to = request_params::resolve_date_param(request, DATE_TO_PARAM)?;
        Ok(PurchaseDateRange::new(from, to))
    }
}
