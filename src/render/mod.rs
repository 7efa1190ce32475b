pub mod caption;
pub mod compositor;
