pub mod process_cart;
