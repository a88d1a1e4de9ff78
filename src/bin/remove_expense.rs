/// 経費削除Lambdaエントリポイント
///
/// API Gateway経由の`DELETE /expenses/{Id}`リクエストを処理する。
/// 削除は冪等で、存在しないIDでも200を返す。
use expense_api::application::RemoveExpenseHandler;
use expense_api::infrastructure::{DynamoDbConfig, DynamoExpenseRepository, init_logging};
use lambda_http::{Error, Request, run, service_fn};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("経費削除Lambda関数を初期化");

    // コールドスタート時に一度だけ設定とリポジトリを構築し、
    // warm start間でDynamoDBクライアントを再利用する
    let config = DynamoDbConfig::from_env().await?;
    let repository = DynamoExpenseRepository::new(
        config.client().clone(),
        config.expenses_table().to_string(),
    );
    let handler = RemoveExpenseHandler::new(repository);
    let handler_ref = &handler;

    // Lambda関数を実行
    run(service_fn(move |request: Request| async move {
        handler_ref.handle(&request).await
    }))
    .await
}
