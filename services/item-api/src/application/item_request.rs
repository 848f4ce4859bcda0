/// API Gatewayプロキシ統合のリクエストイベント
///
/// ハンドラーが参照するのは httpMethod / path / pathParameters / body のみで、
/// それ以外のフィールド（headers, requestContext等）は読み捨てる。
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// アイテムIDのパスパラメータ名（/items/{id}）
pub const ID_PATH_PARAMETER: &str = "id";

/// 正規化されたHTTPリクエスト
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    /// HTTPメソッド
    #[serde(default)]
    pub http_method: String,

    /// リクエストパス（ログ用、ルーティングには使わない）
    #[serde(default)]
    pub path: Option<String>,

    /// パスパラメータ（API Gatewayはパラメータが無いとnullを送る）
    #[serde(default)]
    pub path_parameters: Option<HashMap<String, String>>,

    /// リクエストボディ（JSON文字列）
    #[serde(default)]
    pub body: Option<String>,
}

impl ItemRequest {
    /// メソッドとパスを指定して作成
    pub fn new(http_method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            http_method: http_method.into(),
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// `id`パスパラメータを設定
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.path_parameters
            .get_or_insert_with(HashMap::new)
            .insert(ID_PATH_PARAMETER.to_string(), id.into());
        self
    }

    /// ボディを設定
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// `id`パスパラメータを取得
    pub fn id(&self) -> Option<&str> {
        self.path_parameters
            .as_ref()
            .and_then(|params| params.get(ID_PATH_PARAMETER))
            .map(String::as_str)
    }

    /// ログ出力用のパス
    pub fn path_or_empty(&self) -> &str {
        self.path.as_deref().unwrap_or("")
    }
}
