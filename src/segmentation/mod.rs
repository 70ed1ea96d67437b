pub mod algorithm;

pub use algorithm::group_modes;
