pub mod switcheo;
pub mod util;

pub use switcheo::SwitcheoPriceFeed;
