/// アイテムCRUDハンドラー
///
/// API Gatewayから受け取ったリクエストを操作に振り分け、
/// ItemRepositoryへの単一の呼び出し（またはゼロ回）でレスポンスを生成する。
use thiserror::Error;
use tracing::{error, info, warn};

use super::item_request::ItemRequest;
use super::item_response::{ITEM_DELETED_MESSAGE, ITEM_NOT_FOUND_MESSAGE, ItemResponse};
use crate::domain::{
    Clock, Item, ItemBody, ItemBodyError, ItemOperation, SystemClock, iso_timestamp, millis_id,
};
use crate::infrastructure::{ItemRepository, ItemRepositoryError};

/// ハンドラー処理中の想定外エラー
///
/// いずれも最上位で500レスポンスに変換される。
#[derive(Debug, Error)]
pub enum ItemHandlerError {
    /// リクエストボディが不正
    #[error(transparent)]
    InvalidBody(#[from] ItemBodyError),

    /// リポジトリ操作エラー
    #[error(transparent)]
    Repository(#[from] ItemRepositoryError),

    /// レスポンスのシリアライズに失敗
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// アイテムCRUDリクエストを処理するハンドラー
///
/// リポジトリは起動時に一度だけ作成して注入し、呼び出し間で再利用する。
pub struct ItemHandler<R, C = SystemClock>
where
    R: ItemRepository,
    C: Clock,
{
    /// アイテムリポジトリ
    repository: R,
    /// ID・タイムスタンプ生成用クロック
    clock: C,
}

impl<R> ItemHandler<R, SystemClock>
where
    R: ItemRepository,
{
    /// システム時刻を使うハンドラーを作成
    pub fn new(repository: R) -> Self {
        Self::with_clock(repository, SystemClock)
    }
}

impl<R, C> ItemHandler<R, C>
where
    R: ItemRepository,
    C: Clock,
{
    /// クロックを指定してハンドラーを作成
    pub fn with_clock(repository: R, clock: C) -> Self {
        Self { repository, clock }
    }

    /// リクエストを処理してレスポンスを返す
    ///
    /// # 処理フロー
    /// 1. メソッドとIDから操作を判定（クライアント入力エラーはここで400/405）
    /// 2. 操作を実行
    /// 3. 想定外エラーはすべて500レスポンスに変換
    ///
    /// この関数自体は失敗しない。
    pub async fn handle(&self, request: &ItemRequest) -> ItemResponse {
        info!(
            method = %request.http_method,
            path = %request.path_or_empty(),
            item_id = request.id().unwrap_or(""),
            "リクエスト受信"
        );

        let operation = match ItemOperation::resolve(&request.http_method, request.id()) {
            Ok(operation) => operation,
            Err(err) => {
                warn!(method = %request.http_method, error = %err, "リクエスト拒否");
                return ItemResponse::from_dispatch_error(&err);
            }
        };

        let response = match self.execute(operation, request.body.as_deref()).await {
            Ok(response) => response,
            Err(err) => {
                error!(method = %request.http_method, error = %err, "リクエスト処理失敗");
                ItemResponse::internal_error(&err.to_string())
            }
        };

        info!(status_code = response.status_code, "レスポンス送信");
        response
    }

    /// 判定済みの操作を実行
    async fn execute(
        &self,
        operation: ItemOperation,
        body: Option<&str>,
    ) -> Result<ItemResponse, ItemHandlerError> {
        match operation {
            ItemOperation::List => {
                let items = self.repository.scan_all().await?;
                Ok(ItemResponse::json(200, &items)?)
            }
            ItemOperation::Get { id } => match self.repository.get(&id).await? {
                Some(item) => Ok(ItemResponse::json(200, &item)?),
                None => Ok(ItemResponse::message(404, ITEM_NOT_FOUND_MESSAGE)),
            },
            ItemOperation::Create => {
                let body = ItemBody::parse(body)?;
                let now = self.clock.now();
                let item = Item::created(millis_id(now), body, iso_timestamp(now));

                self.repository.put(&item).await?;
                info!(item_id = item.id().unwrap_or(""), "アイテム作成");
                Ok(ItemResponse::json(201, &item)?)
            }
            ItemOperation::Replace { id } => {
                let body = ItemBody::parse(body)?;
                let item = Item::replaced(id, body, iso_timestamp(self.clock.now()));

                self.repository.put(&item).await?;
                Ok(ItemResponse::json(200, &item)?)
            }
            ItemOperation::Delete { id } => {
                self.repository.delete(&id).await?;
                Ok(ItemResponse::message(200, ITEM_DELETED_MESSAGE))
            }
        }
    }
}
