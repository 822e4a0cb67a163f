pub mod place_order;
