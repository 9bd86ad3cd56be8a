// Domain types and value objects
pub mod catalog;
pub mod gesture;
pub mod optics;
pub mod simplify;

// Re-export commonly used types
pub use catalog::{Demo, DemoKind, LensModule, filter_modules, find_module, parse_catalog};
pub use gesture::{DragEvent, SplitDrag};
pub use optics::{CoatingStack, MaterialIndex};
pub use simplify::customer_text;
