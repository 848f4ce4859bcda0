/// ログ基盤モジュール
///
/// CloudWatch Logsで検索しやすいよう、tracingのイベントを1行1 JSONで出力する。
use std::sync::Once;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// フィルタ未指定時のログレベル
const DEFAULT_LOG_LEVEL: &str = "info";

static INIT: Once = Once::new();

/// `RUST_LOG`からフィルタを作成（未設定・不正な値ならデフォルト）
fn env_filter_or(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Lambda向けのJSONログサブスクライバーを初期化する
///
/// 何度呼び出しても初期化は最初の1回だけ行われる。
pub fn init_logging() {
    INIT.call_once(|| {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .flatten_event(true)
            .with_current_span(false);

        // 既に別のサブスクライバーが設定済みなら、そちらに警告を出して続行する
        if let Err(err) = tracing_subscriber::registry()
            .with(env_filter_or(DEFAULT_LOG_LEVEL))
            .with(json_layer)
            .try_init()
        {
            tracing::warn!(error = %err, "ログサブスクライバーは設定済みのため初期化をスキップ");
        }
    });
}

/// テスト用のログサブスクライバーを初期化する（人間が読みやすい形式）
#[cfg(test)]
pub fn init_test_logging() {
    static TEST_INIT: Once = Once::new();

    TEST_INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .compact();

        let _ = tracing_subscriber::registry()
            .with(env_filter_or("debug"))
            .with(fmt_layer)
            .try_init();
    });
}
