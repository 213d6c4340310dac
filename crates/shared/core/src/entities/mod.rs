mod order;
mod order_kind;
mod order_status;
mod quote;
mod side;

pub use order::{NewOrder, Order, OrderId, OrderUpdate, TransitionError};
pub use order_kind::OrderKind;
pub use order_status::OrderStatus;
pub use quote::Quote;
pub use side::Side;
