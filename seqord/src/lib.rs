pub mod framework;
pub mod number;
pub mod ordering;
pub mod util;
