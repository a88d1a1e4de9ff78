/// DynamoDBで経費レコードを管理するための経費リポジトリ
use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_dynamodb::types::AttributeValue;
use thiserror::Error;
use tracing::warn;

use crate::domain::{Expense, PurchaseDateRange};

/// 経費リポジトリ操作のエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExpenseRepositoryError {
    /// DynamoDBへの書き込みに失敗
    #[error("Write error: {0}")]
    WriteError(String),

    /// DynamoDBからの読み取りに失敗
    #[error("Read error: {0}")]
    ReadError(String),

    /// データのシリアライズ/デシリアライズに失敗
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// 経費永続化用トレイト
///
/// このトレイトは経費テーブルへの操作を抽象化し、
/// 異なる実装を可能にします（実際のDynamoDB、テスト用モック）。
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    /// 経費IDで取得
    ///
    /// # 引数
    /// * `expense_id` - 経費ID
    ///
    /// # 戻り値
    /// * 見つかった場合は`Ok(Some(Expense))`
    /// * 見つからなかった場合は`Ok(None)`
    /// * 失敗時は`Err(ExpenseRepositoryError)`
    async fn get_by_id(&self, expense_id: &str) -> Result<Option<Expense>, ExpenseRepositoryError>;

    /// 経費を保存（同一IDが存在する場合は上書き）
    async fn put(&self, expense: &Expense) -> Result<(), ExpenseRepositoryError>;

    /// 経費IDで削除
    ///
    /// # 戻り値
    /// * 成功時は`Ok(())`（経費が存在しなかった場合も含む）
    /// * 失敗時は`Err(ExpenseRepositoryError)`
    async fn delete(&self, expense_id: &str) -> Result<(), ExpenseRepositoryError>;

    /// 範囲に合致する経費を全件取得
    ///
    /// # 引数
    /// * `range` - 購入日時の絞り込み範囲（絞り込みなしも可）
    ///
    /// # 戻り値
    /// * `Ok(Vec<Expense>)` - 合致した経費（0件の場合は空）
    /// * `Err(ExpenseRepositoryError)` - 読み取りエラー
    async fn scan(
        &self,
        range: &PurchaseDateRange,
    ) -> Result<Vec<Expense>, ExpenseRepositoryError>;
}

/// ExpenseRepositoryのDynamoDB実装
///
/// この構造体はDynamoDBを使用して経費レコードを
/// 永続的に保存するExpenseRepositoryトレイトを実装します。
#[derive(Debug, Clone)]
pub struct DynamoExpenseRepository {
    /// DynamoDBクライアント
    client: DynamoDbClient,
    /// 経費テーブル名
    table_name: String,
}

impl DynamoExpenseRepository {
    /// 新しいDynamoExpenseRepositoryを作成
    ///
    /// # 引数
    /// * `client` - DynamoDBクライアント
    /// * `table_name` - 経費テーブルの名前
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// 経費を完全なJSONにシリアライズ
    fn serialize_expense(expense: &Expense) -> Result<String, ExpenseRepositoryError> {
        serde_json::to_string(expense)
            .map_err(|e| ExpenseRepositoryError::SerializationError(e.to_string()))
    }

    /// JSONから経費をデシリアライズ
    fn deserialize_expense(json: &str) -> Result<Expense, ExpenseRepositoryError> {
        serde_json::from_str(json)
            .map_err(|e| ExpenseRepositoryError::SerializationError(e.to_string()))
    }
}

#[async_trait]
impl ExpenseRepository for DynamoExpenseRepository {
    async fn get_by_id(&self, expense_id: &str) -> Result<Option<Expense>, ExpenseRepositoryError> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(expense_id.to_string()))
            .send()
            .await
            .map_err(|e| ExpenseRepositoryError::ReadError(e.into_service_error().to_string()))?;

        match result.item {
            Some(item) => {
                let json = item
                    .get("expense_json")
                    .and_then(|v| v.as_s().ok())
                    .ok_or_else(|| {
                        ExpenseRepositoryError::SerializationError(
                            "Missing expense_json field".to_string(),
                        )
                    })?;
                Ok(Some(Self::deserialize_expense(json)?))
            }
            None => Ok(None),
        }
    }

    async fn put(&self, expense: &Expense) -> Result<(), ExpenseRepositoryError> {
        let expense_json = Self::serialize_expense(expense)?;

        // スカラー属性に加えて完全なJSONを保存し、読み取りはJSONから復元する
        self.client
            .put_item()
            .table_name(&self.table_name)
            .item("id", AttributeValue::S(expense.id.clone()))
            .item("name", AttributeValue::S(expense.name.clone()))
            .item("cost", AttributeValue::N(expense.cost.to_string()))
            .item(
                "purchase_date",
                AttributeValue::N(expense.purchase_date.timestamp().to_string()),
            )
            .item(
                "created_timestamp",
                AttributeValue::N(expense.created_timestamp.timestamp().to_string()),
            )
            .item("expense_json", AttributeValue::S(expense_json))
            .send()
            .await
            .map_err(|e| ExpenseRepositoryError::WriteError(e.into_service_error().to_string()))?;

        Ok(())
    }

    async fn delete(&self, expense_id: &str) -> Result<(), ExpenseRepositoryError> {
        // 条件なしの削除: 存在しないIDでも成功する
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(expense_id.to_string()))
            .send()
            .await
            .map_err(|e| ExpenseRepositoryError::WriteError(e.into_service_error().to_string()))?;

        Ok(())
    }

    async fn scan(
        &self,
        range: &PurchaseDateRange,
    ) -> Result<Vec<Expense>, ExpenseRepositoryError> {
        let mut expenses = Vec::new();
        let mut last_evaluated_key = None;

        // ページネーション: LastEvaluatedKeyがある限りスキャンを続ける
        loop {
            let mut scan_builder = self.client.scan().table_name(&self.table_name);

            // 前回のスキャンの続きから開始
            if let Some(key) = last_evaluated_key.take() {
                scan_builder = scan_builder.set_exclusive_start_key(Some(key));
            }

            let result = scan_builder
                .send()
                .await
                .map_err(|e| ExpenseRepositoryError::ReadError(e.into_service_error().to_string()))?;

            if let Some(items) = result.items {
                for item in items {
                    let Some(json) = item.get("expense_json").and_then(|v| v.as_s().ok()) else {
                        warn!(table = %self.table_name, "expense_json属性のない項目をスキップ");
                        continue;
                    };

                    let expense = Self::deserialize_expense(json)?;

                    // 範囲評価はアプリケーション層で行う（日付のインデックスは持たない）
                    if range.matches(&expense) {
                        expenses.push(expense);
                    }
                }
            }

            // 次のページがあるか確認
            match result.last_evaluated_key {
                Some(key) => last_evaluated_key = Some(key),
                None => break, // 全データ取得完了
            }
        }

        Ok(expenses)
    }
}
