/// 経費追加ハンドラー
///
/// リクエストボディのJSONから経費を作成して保存する。
use lambda_http::{Body, Error, Request, Response};
use thiserror::Error as ThisError;
use tracing::info;

use crate::application::responses;
use crate::domain::{Expense, ExpenseDraft};
use crate::infrastructure::ExpenseRepository;

/// リクエストボディのパースエラー
#[derive(Debug, Clone, ThisError, PartialEq)]
pub enum BodyParseError {
    /// JSONとして解釈できない、または必須フィールドが欠落
    #[error("invalid request body: {0}")]
    InvalidBody(String),
}

/// 経費を追加するハンドラー
///
/// ボディに`id`や`createdTimestamp`が含まれていても無視し、
/// 常にシステム側で採番する。
pub struct AddExpenseHandler<R: ExpenseRepository> {
    /// 経費リポジトリ
    repository: R,
}

impl<R: ExpenseRepository> AddExpenseHandler<R> {
    /// 新しいAddExpenseHandlerを作成
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// 追加リクエストを処理
    ///
    /// # 処理フロー
    /// 1. ボディをJSONとしてパース（不正なボディは400）
    /// 2. IDと登録日時を採番して経費レコードを作成
    /// 3. リポジトリへ保存
    /// 4. 200 + 採番したIDのプレーンテキストを返却
    ///
    /// リポジトリのエラーは呼び出し元（Lambdaランタイム）へ伝播する。
    pub async fn handle(&self, request: &Request) -> Result<Response<Body>, Error> {
        let draft = match Self::parse_body(request) {
            Ok(draft) => draft,
            Err(error) => return responses::bad_request(error.to_string()),
        };

        let expense = Expense::create(draft);

        info!(expense_id = %expense.id, "経費を保存");

        self.repository.put(&expense).await?;

        responses::text_ok(expense.id)
    }

    /// リクエストボディを経費の作成入力としてパースする
    fn parse_body(request: &Request) -> Result<ExpenseDraft, BodyParseError> {
        let result = match request.body() {
            Body::Text(json) => serde_json::from_str(json),
            Body::Binary(bytes) => serde_json::from_slice(bytes),
            Body::Empty => serde_json::from_str(""),
            _ => serde_json::from_str(""),
        };

        result.map_err(|e| BodyParseError::InvalidBody(e.to_string()))
    }
}
