// Domain layer modules
pub mod clock;
pub mod item;
pub mod item_operation;

// Re-exports
pub use clock::{Clock, SystemClock, iso_timestamp, millis_id};
pub use item::{
    CREATED_AT_FIELD, ID_FIELD, Item, ItemBody, ItemBodyError, RESERVED_FIELDS, UPDATED_AT_FIELD,
};
pub use item_operation::{DispatchError, ItemOperation};
