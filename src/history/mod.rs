pub mod manager;
pub mod replay;
