mod authorization_service_impl;
mod user_service_impl;

pub use authorization_service_impl::*;
pub use user_service_impl::*;
