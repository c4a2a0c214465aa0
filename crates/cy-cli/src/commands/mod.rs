pub mod dispatch;
pub mod entity;
pub mod model;
pub mod search;
pub mod transfer;
