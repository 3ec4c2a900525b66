mod alphabet;
mod codec;
mod error;
mod interface;

pub use alphabet::ALPHABET;
pub use codec::*;
pub use error::*;
pub use interface::*;
