/// 経費レコードのドメインモデル
///
/// 1件の購入を表すエンティティと、クライアントから受け取る作成入力を定義する。
/// JSONフィールド名は`id`, `name`, `cost`, `purchaseDate`, `createdTimestamp`に固定。
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::domain::date_range::parse_date_time;

/// 経費レコード
///
/// `id`と`createdTimestamp`は作成時にシステムが付与し、以後変更されない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// 経費ID（作成時に採番、全レコードで一意）
    pub id: String,
    /// 経費の名前（自由テキスト）
    pub name: String,
    /// 金額（通貨単位なし）
    pub cost: f64,
    /// 購入日時（クライアント指定）
    pub purchase_date: DateTime<Utc>,
    /// 登録日時（システム付与、purchaseDateとは別物）
    pub created_timestamp: DateTime<Utc>,
}

/// クライアントから受け取る経費の作成入力
///
/// `id`と`createdTimestamp`はシステム採番のため受け取らない
/// （ボディに含まれていても無視される）。
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDraft {
    /// 経費の名前
    pub name: String,
    /// 金額
    pub cost: f64,
    /// 購入日時
    #[serde(deserialize_with = "deserialize_purchase_date")]
    pub purchase_date: DateTime<Utc>,
}

/// purchaseDateフィールドのデシリアライザ
///
/// RFC 3339のほか、`YYYY-MM-DDTHH:MM:SS`や`YYYY-MM-DD`形式も受け付ける。
fn deserialize_purchase_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_date_time(&value).map_err(serde::de::Error::custom)
}

impl Expense {
    /// 作成入力からIDと登録日時を採番して経費レコードを作成
    ///
    /// # 引数
    /// * `draft` - クライアントから受け取った作成入力
    ///
    /// # 戻り値
    /// UUID v4のIDと現在時刻の登録日時を持つ経費レコード
    pub fn create(draft: ExpenseDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            cost: draft.cost,
            purchase_date: draft.purchase_date,
            created_timestamp: Utc::now(),
        }
    }
}
