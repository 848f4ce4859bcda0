// アプリケーション層モジュール
pub mod item_handler;
pub mod item_request;
pub mod item_response;

// 再エクスポート
pub use item_handler::{ItemHandler, ItemHandlerError};
pub use item_request::ItemRequest;
pub use item_response::ItemResponse;
