pub mod paging;
pub mod user;
