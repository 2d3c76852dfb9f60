//! Catalog feature: browsing the third-party stock-video proxy and deriving
//! display titles from source URL slugs.

pub(crate) mod client;
pub(crate) mod title;
pub(crate) mod types;
