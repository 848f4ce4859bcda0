/// アイテムCRUD Lambdaエントリポイント
///
/// API Gateway（RESTプロキシ統合）の /items, /items/{id} へのリクエストを処理する。
/// DynamoDBクライアントは起動時に一度だけ作成し、全呼び出しで再利用する。
use item_api::application::{ItemHandler, ItemRequest, ItemResponse};
use item_api::domain::Clock;
use item_api::infrastructure::{
    DynamoDbConfig, DynamoItemRepository, ItemRepository, init_logging,
};
use lambda_runtime::{Error, LambdaEvent, service_fn};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    // TABLE_NAMEが無い場合はここで起動失敗させる
    let config = DynamoDbConfig::from_env().await?;

    info!(table_name = %config.table_name(), "アイテムLambda関数を初期化");

    let repository =
        DynamoItemRepository::new(config.client().clone(), config.table_name().to_string());
    let handler = ItemHandler::new(repository);
    let handler = &handler;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<ItemRequest>| {
        handle_event(handler, event)
    }))
    .await
}

/// Lambdaイベントをハンドラーに渡す
///
/// ハンドラーは失敗を500レスポンスに変換するため、常に`Ok`を返す。
async fn handle_event<R, C>(
    handler: &ItemHandler<R, C>,
    event: LambdaEvent<ItemRequest>,
) -> Result<ItemResponse, Error>
where
    R: ItemRepository,
    C: Clock,
{
    Ok(handler.handle(&event.payload).await)
}
