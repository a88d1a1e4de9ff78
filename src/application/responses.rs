/// HTTPレスポンス構築ヘルパー
///
/// レスポンスエンベロープ（ステータスコード + ヘッダー + ボディ）の
/// 組み立てをハンドラー間で共通化する。
use lambda_http::http::header::CONTENT_TYPE;
use lambda_http::{Body, Error, Response};

/// JSONボディ付きの200レスポンスを構築
pub fn json_ok(body: String) -> Result<Response<Body>, Error> {
    Response::builder()
        .status(200)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::Text(body))
        .map_err(Error::from)
}

/// プレーンテキストボディ付きの200レスポンスを構築
pub fn text_ok(body: String) -> Result<Response<Body>, Error> {
    Response::builder()
        .status(200)
        .header(CONTENT_TYPE, "text/plain")
        .body(Body::Text(body))
        .map_err(Error::from)
}

/// 検証エラー用の400レスポンスを構築（プレーンテキストボディ）
pub fn bad_request(message: String) -> Result<Response<Body>, Error> {
    Response::builder()
        .status(400)
        .body(Body::Text(message))
        .map_err(Error::from)
}

/// 空ボディのレスポンスを構築
pub fn empty(status: u16) -> Result<Response<Body>, Error> {
    Response::builder()
        .status(status)
        .body(Body::Empty)
        .map_err(Error::from)
}
