/// API Gatewayプロキシ統合のレスポンス
///
/// すべてのレスポンスはJSONボディとCORSヘッダーを持つ。
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;

use crate::domain::DispatchError;

/// アイテムが見つからない場合のメッセージ
pub const ITEM_NOT_FOUND_MESSAGE: &str = "Item not found";

/// 削除成功時のメッセージ
pub const ITEM_DELETED_MESSAGE: &str = "Item deleted";

/// 想定外エラー時のメッセージ
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// 正規化されたHTTPレスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    /// HTTPステータスコード
    pub status_code: u16,
    /// レスポンスヘッダー
    pub headers: BTreeMap<String, String>,
    /// JSON文字列のボディ
    pub body: String,
}

impl ItemResponse {
    /// 値をJSONにシリアライズしてレスポンスを作成
    pub fn json<T: Serialize + ?Sized>(
        status_code: u16,
        body: &T,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self::with_body(status_code, serde_json::to_string(body)?))
    }

    /// `{"message": ...}` 形式のレスポンスを作成
    pub fn message(status_code: u16, message: &str) -> Self {
        Self::with_body(status_code, json!({ "message": message }).to_string())
    }

    /// 500レスポンスを作成
    ///
    /// 失敗内容の文字列を`error`フィールドにそのまま含める。
    pub fn internal_error(error: &str) -> Self {
        Self::with_body(
            500,
            json!({ "message": INTERNAL_ERROR_MESSAGE, "error": error }).to_string(),
        )
    }

    /// 操作判定エラーからレスポンスを作成
    ///
    /// - IDなし（PUT/DELETE）: 400
    /// - 未対応メソッド: 405
    pub fn from_dispatch_error(error: &DispatchError) -> Self {
        let status_code = match error {
            DispatchError::MissingId => 400,
            DispatchError::MethodNotAllowed => 405,
        };
        Self::message(status_code, &error.to_string())
    }

    fn with_body(status_code: u16, body: String) -> Self {
        Self {
            status_code,
            headers: default_headers(),
            body,
        }
    }

    /// ボディをJSON値として解析
    #[cfg(test)]
    pub fn body_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// 全レスポンス共通のヘッダー
///
/// - Content-Type: application/json
/// - Access-Control-Allow-Origin: *
fn default_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("Content-Type".to_string(), "application/json".to_string()),
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
    ])
}
