//! The five Keccak step mappings. Each one reads a state array and returns
//! a fresh one; nothing is mutated in place.

mod chi;
mod iota;
mod pi;
mod rho;
mod theta;

pub use chi::chi;
pub use iota::iota;
pub use pi::pi;
pub use rho::rho;
pub use theta::theta;
