/// 購入日時による絞り込み
///
/// 経費一覧の絞り込み条件（下限・上限）の評価と、
/// クライアント指定の日時文字列のパースを提供する。
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use thiserror::Error;

use crate::domain::expense::Expense;

/// 日時文字列のパースエラー
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DateParseError {
    /// サポートされる形式として解釈できない値
    #[error("invalid date-time value: {0}")]
    InvalidDateTime(String),
}

/// 日時文字列をUTC日時としてパース
///
/// 受け付ける形式:
/// - RFC 3339（例: `2019-06-08T10:15:00Z`）
/// - オフセットなしの日時 `YYYY-MM-DDTHH:MM:SS`（UTCとして解釈）
/// - 日付のみ `YYYY-MM-DD`（その日のUTC 00:00:00として解釈）
///
/// # 引数
/// * `value` - パースする日時文字列
///
/// # 戻り値
/// * `Ok(DateTime<Utc>)` - パース成功時
/// * `Err(DateParseError)` - どの形式にも合致しない場合
pub fn parse_date_time(value: &str) -> Result<DateTime<Utc>, DateParseError> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Ok(date_time.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&naive));
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }

    Err(DateParseError::InvalidDateTime(value.to_string()))
}

/// 購入日時の絞り込み範囲
///
/// 下限・上限はいずれも任意で、両端を含む。複数の条件はAND結合で評価される。
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PurchaseDateRange {
    /// 下限（`purchaseDate >= from`）
    pub from: Option<DateTime<Utc>>,
    /// 上限（`purchaseDate <= to`）
    pub to: Option<DateTime<Utc>>,
}

impl PurchaseDateRange {
    /// 下限・上限を指定して範囲を作成
    pub fn new(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Self {
        Self { from, to }
    }

    /// 絞り込みなしの範囲を作成（全件が合致する）
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// 経費がこの範囲に含まれるか判定
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(from) = self.from
            && expense.purchase_date < from
        {
            return false;
        }

        if let Some(to) = self.to
            && expense.purchase_date > to
        {
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== 日時パーステスト ====================

    // DateParseError表示メッセージのテスト
    #[test]
    fn test_date_parse_error_display() {
        let error = DateParseError::InvalidDateTime("garbage".to_string());
        assert_eq!(error.to_string(), "invalid date-time value: garbage");
    }

    // RFC 3339形式のパーステスト
    #[test]
    fn test_parse_rfc3339() {
        let parsed = parse_date_time("2019-06-08T10:15:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2019, 6, 8, 10, 15, 0).unwrap());
    }

    // オフセット付きRFC 3339がUTCに正規化されるテスト
    #[test]
    fn test_parse_rfc3339_with_offset() {
        let parsed = parse_date_time("2019-06-08T09:00:00+09:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2019, 6, 8, 0, 0, 0).unwrap());
    }

    // オフセットなし日時のパーステスト
    #[test]
    fn test_parse_naive_date_time() {
        let parsed = parse_date_time("2019-06-08T10:15:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2019, 6, 8, 10, 15, 0).unwrap());
    }

    // 日付のみのパーステスト（UTC 00:00:00になる）
    #[test]
    fn test_parse_date_only() {
        let parsed = parse_date_time("2019-06-13").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2019, 6, 13, 0, 0, 0).unwrap());
    }

    // 解釈できない値がエラーになるテスト
    #[test]
    fn test_parse_invalid_value() {
        let result = parse_date_time("06/13/2019");
        assert_eq!(
            result,
            Err(DateParseError::InvalidDateTime("06/13/2019".to_string()))
        );
    }

    // ==================== 絞り込み範囲テスト ====================

    fn expense_on(date: &str) -> Expense {
        Expense {
            id: format!("expense-{date}"),
            name: "Lunch".to_string(),
            cost: 10.0,
            purchase_date: parse_date_time(date).unwrap(),
            created_timestamp: Utc::now(),
        }
    }

    // 絞り込みなしの範囲が全件に合致するテスト
    #[test]
    fn test_unbounded_matches_everything() {
        let range = PurchaseDateRange::unbounded();
        assert!(range.matches(&expense_on("2019-06-08")));
        assert!(range.matches(&expense_on("1970-01-01")));
    }

    // 下限の評価テスト（境界を含む）
    #[test]
    fn test_lower_bound_inclusive() {
        let range = PurchaseDateRange::new(Some(parse_date_time("2019-06-13").unwrap()), None);

        assert!(!range.matches(&expense_on("2019-06-08")));
        assert!(range.matches(&expense_on("2019-06-13")));
        assert!(range.matches(&expense_on("2019-06-14")));
        assert!(range.matches(&expense_on("2019-06-20")));
    }

    // 上限の評価テスト（境界を含む）
    #[test]
    fn test_upper_bound_inclusive() {
        let range = PurchaseDateRange::new(None, Some(parse_date_time("2019-06-19").unwrap()));

        assert!(range.matches(&expense_on("2019-06-08")));
        assert!(range.matches(&expense_on("2019-06-19")));
        assert!(!range.matches(&expense_on("2019-06-20")));
    }

    // 両端指定の評価テスト（AND結合）
    #[test]
    fn test_both_bounds() {
        let range = PurchaseDateRange::new(
            Some(parse_date_time("2019-06-13").unwrap()),
            Some(parse_date_time("2019-06-19").unwrap()),
        );

        assert!(!range.matches(&expense_on("2019-06-08")));
        assert!(range.matches(&expense_on("2019-06-14")));
        assert!(!range.matches(&expense_on("2019-06-20")));
    }
}
