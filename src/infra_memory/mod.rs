mod registered_user_repo_memory;
mod session_storage_memory;

pub use registered_user_repo_memory::*;
pub use session_storage_memory::*;
