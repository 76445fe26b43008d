pub mod asset;
pub use asset::{AssetService, UploadedImage};

pub mod product_service;
pub use product_service::{ProductError, ProductService};

pub mod product_service_impl;
pub use product_service_impl::SeaOrmProductService;
