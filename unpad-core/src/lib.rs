pub mod error;
pub mod layout;
pub mod unpack;

pub use error::*;
pub use layout::*;
pub use unpack::*;
