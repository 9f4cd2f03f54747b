pub mod report;
pub mod sale;

pub use report::*;
pub use sale::*;
