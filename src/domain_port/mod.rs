// store

mod session_storage;

pub use session_storage::*;

// repo

mod registered_user_repo;

pub use registered_user_repo::*;
