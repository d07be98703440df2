mod analyze_product;

pub use analyze_product::*;
