/// HTTPメソッドとパスパラメータからアイテム操作を判定する
///
/// 判定はメソッドとIDの有無のみで行い、パス文字列は参照しない。
/// ストアへのアクセス前に判定するため、クライアント入力エラーは副作用なしで確定する。
use thiserror::Error;

/// 操作判定のエラー型（クライアント入力エラー）
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// PUT/DELETEでIDが指定されていない
    #[error("ID is required")]
    MissingId,

    /// 対応していないHTTPメソッド
    #[error("Method not allowed")]
    MethodNotAllowed,
}

/// アイテムに対する操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOperation {
    /// 全アイテム取得（GET /items）
    List,
    /// 単一アイテム取得（GET /items/{id}）
    Get { id: String },
    /// アイテム作成（POST /items）
    Create,
    /// アイテム全置換（PUT /items/{id}）
    Replace { id: String },
    /// アイテム削除（DELETE /items/{id}）
    Delete { id: String },
}

impl ItemOperation {
    /// メソッドとIDから操作を判定
    ///
    /// 空文字列のIDは未指定として扱う。メソッドは大文字小文字を区別する。
    pub fn resolve(method: &str, id: Option<&str>) -> Result<Self, DispatchError> {
        let id = id.filter(|id| !id.is_empty()).map(str::to_string);

        match (method, id) {
            ("GET", None) => Ok(Self::List),
            ("GET", Some(id)) => Ok(Self::Get { id }),
            ("POST", _) => Ok(Self::Create),
            ("PUT", Some(id)) => Ok(Self::Replace { id }),
            ("DELETE", Some(id)) => Ok(Self::Delete { id }),
            ("PUT", None) | ("DELETE", None) => Err(DispatchError::MissingId),
            _ => Err(DispatchError::MethodNotAllowed),
        }
    }
}
