//! Page configuration and slicing.

pub use tablesift_pagination::*;
