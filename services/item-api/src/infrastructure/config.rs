/// DynamoDB接続設定
///
/// Lambdaの起動時に一度だけ読み込み、以降の呼び出しでは同じクライアントを再利用する。
use aws_sdk_dynamodb::Client as DynamoDbClient;
use thiserror::Error;

/// アイテムテーブル名を指定する環境変数
pub const TABLE_NAME_ENV: &str = "TABLE_NAME";

/// DynamoDB設定のエラー型
#[derive(Debug, Error)]
pub enum DynamoDbConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// テーブル名とクライアントを持つDynamoDB設定
///
/// テーブル名は環境変数`TABLE_NAME`で設定する。
#[derive(Debug, Clone)]
pub struct DynamoDbConfig {
    /// DynamoDBクライアントインスタンス
    client: DynamoDbClient,
    /// アイテムテーブル名
    table_name: String,
}

impl DynamoDbConfig {
    /// 環境からAWS設定を読み込み、環境変数からテーブル名を読み取って新しいDynamoDbConfigを作成
    ///
    /// 環境変数:
    /// - AWS認証情報・リージョン: aws-configにより自動読み込み
    /// - TABLE_NAME: アイテム用DynamoDBテーブル名
    pub async fn from_env() -> Result<Self, DynamoDbConfigError> {
        // テーブル名が無ければAWS設定を読み込む前に失敗させる
        let table_name = table_name_from_env()?;

        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = DynamoDbClient::new(&aws_config);

        Ok(Self { client, table_name })
    }

    /// 明示的な値で新しいDynamoDbConfigを作成（テスト用）
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// DynamoDBクライアントへの参照を取得
    pub fn client(&self) -> &DynamoDbClient {
        &self.client
    }

    /// アイテムテーブル名を取得
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

/// 環境変数からテーブル名を読み込む
///
/// 空文字列は未設定として扱う。
pub fn table_name_from_env() -> Result<String, DynamoDbConfigError> {
    std::env::var(TABLE_NAME_ENV)
        .ok()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| DynamoDbConfigError::MissingEnvVar(TABLE_NAME_ENV.to_string()))
}
