pub mod career;
pub mod quiz;
