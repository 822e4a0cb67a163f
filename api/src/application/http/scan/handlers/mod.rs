pub mod scan_product;
