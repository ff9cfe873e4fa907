pub mod beaap;
pub mod fgs;
