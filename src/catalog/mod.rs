pub mod scan;

pub use scan::{build_catalog, display_name};
