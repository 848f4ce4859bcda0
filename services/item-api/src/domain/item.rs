/// アイテムのドメインモデル
///
/// アイテムは`id`だけを必須とするJSONオブジェクトで、それ以外のフィールドは
/// クライアントが送った値をそのまま保持する。`id`、`createdAt`、`updatedAt`は
/// サーバーが割り当てる予約フィールドで、クライアントからの値は常に破棄する。
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// パーティションキーとなるIDフィールド名
pub const ID_FIELD: &str = "id";

/// 作成日時フィールド名
pub const CREATED_AT_FIELD: &str = "createdAt";

/// 更新日時フィールド名
pub const UPDATED_AT_FIELD: &str = "updatedAt";

/// サーバーが割り当てる予約フィールド
pub const RESERVED_FIELDS: [&str; 3] = [ID_FIELD, CREATED_AT_FIELD, UPDATED_AT_FIELD];

/// リクエストボディ解析のエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ItemBodyError {
    /// JSONとして解析できない
    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),

    /// JSONだがオブジェクトではない
    #[error("Request body must be a JSON object")]
    NotAnObject,
}

/// 永続化されるアイテム
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(Map<String, Value>);

impl Item {
    /// フィールドマップからアイテムを構築（ストアから読み込んだ値用）
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// 新規作成するアイテムを構築
    ///
    /// `{id, ...body, createdAt}` の順でマージする。
    pub fn created(id: String, body: ItemBody, created_at: String) -> Self {
        Self::with_server_fields(id, body, CREATED_AT_FIELD, created_at)
    }

    /// 置換するアイテムを構築
    ///
    /// 既存アイテムとのマージは行わず、`{id, ...body, updatedAt}` で全置換する。
    pub fn replaced(id: String, body: ItemBody, updated_at: String) -> Self {
        Self::with_server_fields(id, body, UPDATED_AT_FIELD, updated_at)
    }

    fn with_server_fields(
        id: String,
        body: ItemBody,
        timestamp_field: &str,
        timestamp: String,
    ) -> Self {
        let mut fields = Map::new();
        fields.insert(ID_FIELD.to_string(), Value::String(id));
        fields.extend(body.0);
        fields.insert(timestamp_field.to_string(), Value::String(timestamp));
        Self(fields)
    }

    /// IDを取得（文字列でない場合はNone）
    pub fn id(&self) -> Option<&str> {
        self.0.get(ID_FIELD).and_then(Value::as_str)
    }

    /// フィールド値を取得
    #[cfg(test)]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

/// クライアントが送信したアイテム本体（予約フィールド除去済み）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemBody(Map<String, Value>);

impl ItemBody {
    /// リクエストボディ文字列を解析
    ///
    /// ボディが無い場合は空オブジェクトとして扱う。
    pub fn parse(raw: Option<&str>) -> Result<Self, ItemBodyError> {
        let Some(raw) = raw else {
            return Ok(Self::default());
        };

        let value: Value =
            serde_json::from_str(raw).map_err(|e| ItemBodyError::InvalidJson(e.to_string()))?;

        match value {
            Value::Object(fields) => Ok(Self::from_fields(fields)),
            _ => Err(ItemBodyError::NotAnObject),
        }
    }

    /// フィールドマップから構築し、予約フィールドを取り除く
    pub fn from_fields(mut fields: Map<String, Value>) -> Self {
        for reserved in RESERVED_FIELDS {
            fields.remove(reserved);
        }
        Self(fields)
    }
}
