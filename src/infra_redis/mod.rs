mod session_storage_redis;

pub use session_storage_redis::*;
