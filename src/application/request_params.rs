/// リクエストパラメータ解決
///
/// ハンドラー共通のパラメータ取り出しを提供する。
/// 値はパスパラメータ→クエリ文字列パラメータの順で探し、
/// 最初に見つかったものを採用する。
use chrono::{DateTime, Utc};
use lambda_http::{Request, RequestExt};
use thiserror::Error;

use crate::domain::parse_date_time;

/// 経費IDパラメータ名
pub const ID_PARAM: &str = "Id";
/// 購入日時の下限パラメータ名
pub const DATE_FROM_PARAM: &str = "DateFrom";
/// 購入日時の上限パラメータ名
pub const DATE_TO_PARAM: &str = "DateTo";

/// パラメータ解決のエラー型
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParamError {
    /// 必須パラメータの欠落
    #[error("Missing required parameter {0}")]
    MissingParam(String),

    /// 日時として解釈できない値
    #[error("Invalid date-time value for parameter {name}: {value}")]
    InvalidDate { name: String, value: String },
}

/// パラメータ値を解決する
///
/// # 引数
/// * `request` - HTTPリクエスト
/// * `name` - パラメータ名
///
/// # 戻り値
/// パスパラメータ優先で最初に見つかった値。どちらにもなければ`None`
pub fn resolve_param(request: &Request, name: &str) -> Option<String> {
    if let Some(value) = request.path_parameters().first(name) {
        return Some(value.to_string());
    }

    request
        .query_string_parameters()
        .first(name)
        .map(|value| value.to_string())
}

/// 必須パラメータを解決する
///
/// 空文字列は欠落として扱う。
///
/// # 戻り値
/// * `Ok(String)` - 解決できた値
/// * `Err(ParamError::MissingParam)` - どちらのソースにもない場合
pub fn require_param(request: &Request, name: &str) -> Result<String, ParamError> {
    resolve_param(request, name)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ParamError::MissingParam(name.to_string()))
}

/// 任意の日時パラメータを解決してパースする
///
/// # 戻り値
/// * `Ok(Some(DateTime<Utc>))` - パラメータがありパースに成功
/// * `Ok(None)` - パラメータなし
/// * `Err(ParamError::InvalidDate)` - パラメータはあるがパース失敗
pub fn resolve_date_param(
    request: &Request,
    name: &str,
) -> Result<Option<DateTime<Utc>>, ParamError> {
    match resolve_param(request, name) {
        Some(value) => parse_date_time(&value)
            .map(Some)
            .map_err(|_| ParamError::InvalidDate {
                name: name.to_string(),
                value,
            }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashMap;

    // ==================== パラメータ解決テスト ====================

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    // ParamError表示メッセージのテスト
    #[test]
    fn test_missing_param_error_display() {
        let error = ParamError::MissingParam("Id".to_string());
        assert_eq!(error.to_string(), "Missing required parameter Id");
    }

    #[test]
    fn test_invalid_date_error_display() {
        let error = ParamError::InvalidDate {
            name: "DateFrom".to_string(),
            value: "garbage".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date-time value for parameter DateFrom: garbage"
        );
    }

    // パスパラメータから解決できるテスト
    #[test]
    fn test_resolve_from_path_parameters() {
        let request =
            Request::default().with_path_parameters(params(&[("Id", "expense-123")]));

        assert_eq!(
            resolve_param(&request, ID_PARAM),
            Some("expense-123".to_string())
        );
    }

    // クエリ文字列パラメータへのフォールバックテスト
    #[test]
    fn test_resolve_falls_back_to_query_parameters() {
        let request =
            Request::default().with_query_string_parameters(params(&[("Id", "expense-456")]));

        assert_eq!(
            resolve_param(&request, ID_PARAM),
            Some("expense-456".to_string())
        );
    }

    // パスパラメータがクエリより優先されるテスト
    #[test]
    fn test_path_parameters_take_precedence() {
        let request = Request::default()
            .with_path_parameters(params(&[("Id", "from-path")]))
            .with_query_string_parameters(params(&[("Id", "from-query")]));

        assert_eq!(
            resolve_param(&request, ID_PARAM),
            Some("from-path".to_string())
        );
    }

    // どちらのソースにもない場合のテスト
    #[test]
    fn test_resolve_missing_returns_none() {
        let request = Request::default();
        assert_eq!(resolve_param(&request, ID_PARAM), None);
    }

    // 必須パラメータ欠落のテスト
    #[test]
    fn test_require_param_missing() {
        let request = Request::default();
        assert_eq!(
            require_param(&request, ID_PARAM),
            Err(ParamError::MissingParam("Id".to_string()))
        );
    }

    // 空文字列が欠落扱いになるテスト
    #[test]
    fn test_require_param_empty_is_missing() {
        let request = Request::default().with_query_string_parameters(params(&[("Id", "")]));

        assert_eq!(
            require_param(&request, ID_PARAM),
            Err(ParamError::MissingParam("Id".to_string()))
        );
    }

    // 日時パラメータの解決テスト
    #[test]
    fn test_resolve_date_param() {
        let request = Request::default()
            .with_query_string_parameters(params(&[("DateFrom", "2019-06-13")]));

        let resolved = resolve_date_param(&request, DATE_FROM_PARAM).unwrap();
        assert_eq!(
            resolved,
            Some(Utc.with_ymd_and_hms(2019, 6, 13, 0, 0, 0).unwrap())
        );
    }

    // 日時パラメータなしの場合のテスト
    #[test]
    fn test_resolve_date_param_absent() {
        let request = Request::default();
        assert_eq!(resolve_date_param(&request, DATE_FROM_PARAM), Ok(None));
    }

    // 不正な日時パラメータのテスト
    #[test]
    fn test_resolve_date_param_invalid() {
        let request = Request::default()
            .with_query_string_parameters(params(&[("DateFrom", "not-a-date")]));

        assert_eq!(
            resolve_date_param(&request, DATE_FROM_PARAM),
            Err(ParamError::InvalidDate {
                name: "DateFrom".to_string(),
                value: "not-a-date".to_string(),
            })
        );
    }
}
