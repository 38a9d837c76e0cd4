pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod seed;

pub use domain::paging;
pub use domain::user;
pub use outbound::repositories;
