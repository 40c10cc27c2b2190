//! Access control adapters.

mod static_allow_list;

pub use static_allow_list::StaticAllowList;
