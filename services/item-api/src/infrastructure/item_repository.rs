/// DynamoDBでアイテムを管理するためのアイテムリポジトリ
///
/// テーブルはパーティションキー`id`（String）のみを持つ。アイテムの各フィールドは
/// serde_dynamoでJSON値とAttributeValueの間を相互変換する。
use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

use crate::domain::{ID_FIELD, Item};

/// DynamoDBのアイテム表現
pub type AttributeMap = HashMap<String, AttributeValue>;

/// スキャン1ページ分の結果（アイテムとLastEvaluatedKey）
type ScanPage = (Vec<AttributeMap>, Option<AttributeMap>);

/// リポジトリ操作のエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ItemRepositoryError {
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

/// アイテム永続化用トレイト
///
/// 各操作は単一のストア呼び出しに対応し、トランザクションや条件付き書き込みは行わない。
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// IDでアイテムを取得
    ///
    /// # 戻り値
    /// * 見つかった場合は`Ok(Some(Item))`
    /// * 見つからなかった場合は`Ok(None)`
    async fn get(&self, id: &str) -> Result<Option<Item>, ItemRepositoryError>;

    /// アイテムを保存（存在チェックなしの上書き）
    async fn put(&self, item: &Item) -> Result<(), ItemRepositoryError>;

    /// IDでアイテムを削除
    ///
    /// 存在しないIDの削除も成功として扱う。
    async fn delete(&self, id: &str) -> Result<(), ItemRepositoryError>;

    /// 全アイテムを取得（順序不定）
    async fn scan_all(&self) -> Result<Vec<Item>, ItemRepositoryError>;
}

/// ItemをDynamoDBのAttributeValueマップに変換
pub fn item_to_attributes(item: &Item) -> Result<AttributeMap, ItemRepositoryError> {
    serde_dynamo::to_item(item).map_err(|e| ItemRepositoryError::SerializationError(e.to_string()))
}

/// DynamoDBのAttributeValueマップをItemに変換
///
/// 数値（N）は整数として解釈できれば整数、それ以外は浮動小数点数になる。
pub fn item_from_attributes(attributes: AttributeMap) -> Result<Item, ItemRepositoryError> {
    serde_dynamo::from_item(attributes)
        .map_err(|e| ItemRepositoryError::SerializationError(e.to_string()))
}

/// パーティションキーを構築
fn key_of(id: &str) -> AttributeValue {
    AttributeValue::S(id.to_string())
}

/// ItemRepositoryのDynamoDB実装
#[derive(Debug, Clone)]
pub struct DynamoItemRepository {
    /// DynamoDBクライアント
    client: DynamoDbClient,
    /// アイテムテーブル名
    table_name: String,
}

impl DynamoItemRepository {
    /// 新しいDynamoItemRepositoryを作成
    ///
    /// # 引数
    /// * `client` - DynamoDBクライアント
    /// * `table_name` - アイテムテーブルの名前
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// 1ページ分スキャン
    async fn scan_page(
        &self,
        exclusive_start_key: Option<AttributeMap>,
    ) -> Result<ScanPage, ItemRepositoryError> {
        let response = self
            .client
            .scan()
            .table_name(&self.table_name)
            .set_exclusive_start_key(exclusive_start_key)
            .send()
            .await
            .map_err(|e| ItemRepositoryError::ReadError(DisplayErrorContext(&e).to_string()))?;

        Ok((response.items.unwrap_or_default(), response.last_evaluated_key))
    }
}

#[async_trait]
impl ItemRepository for DynamoItemRepository {
    async fn get(&self, id: &str) -> Result<Option<Item>, ItemRepositoryError> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ID_FIELD, key_of(id))
            .send()
            .await
            .map_err(|e| ItemRepositoryError::ReadError(DisplayErrorContext(&e).to_string()))?;

        result.item.map(item_from_attributes).transpose()
    }

    async fn put(&self, item: &Item) -> Result<(), ItemRepositoryError> {
        let attributes = item_to_attributes(item)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(attributes))
            .send()
            .await
            .map_err(|e| ItemRepositoryError::WriteError(DisplayErrorContext(&e).to_string()))?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), ItemRepositoryError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(ID_FIELD, key_of(id))
            .send()
            .await
            .map_err(|e| ItemRepositoryError::WriteError(DisplayErrorContext(&e).to_string()))?;

        Ok(())
    }

    async fn scan_all(&self) -> Result<Vec<Item>, ItemRepositoryError> {
        let items = collect_pages(|start_key| self.scan_page(start_key)).await?;

        debug!(
            table_name = %self.table_name,
            item_count = items.len(),
            "全件スキャン完了"
        );

        Ok(items)
    }
}

/// ページ取得関数を呼び続けて全アイテムを集める
///
/// 前ページのLastEvaluatedKeyを次の呼び出しの開始キーとして渡し、
/// キーが返らなくなった時点で終了する。
async fn collect_pages<F, Fut>(mut fetch_page: F) -> Result<Vec<Item>, ItemRepositoryError>
where
    F: FnMut(Option<AttributeMap>) -> Fut,
    Fut: Future<Output = Result<ScanPage, ItemRepositoryError>>,
{
    let mut items = Vec::new();
    let mut start_key = None;
    let mut page = 0u32;

    loop {
        page += 1;
        let (attributes, next_key) = fetch_page(start_key).await?;

        debug!(
            page = page,
            page_item_count = attributes.len(),
            has_next_key = next_key.is_some(),
            "スキャンページ取得"
        );

        for attribute_map in attributes {
            items.push(item_from_attributes(attribute_map)?);
        }

        match next_key {
            Some(key) => start_key = Some(key),
            None => break,
        }
    }

    Ok(items)
}
