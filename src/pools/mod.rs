pub mod pair;
pub mod pool;
pub mod tick_math;
pub mod v3_pool;

pub use pair::{Pair, V2_FEE};
pub use pool::{Pool, PoolClass, PoolWrapper};
pub use v3_pool::V3Pool;
