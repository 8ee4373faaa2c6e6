pub mod order_list;
pub mod slot_arena;

pub use order_list::OrderList;
pub use slot_arena::{NodeArena, NodeRef};
