pub mod a001_zone;
pub mod a002_worker;
pub mod a003_supplier;
pub mod a004_product;
pub mod a005_purchase;
