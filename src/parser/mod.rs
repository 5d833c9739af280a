//! Order request parsing module.

mod orders;

pub use orders::{parse_order_file, parse_order_str, OrderRequest};
