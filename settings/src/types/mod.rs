pub mod session;
pub mod update;
pub mod wallet;

pub use session::*;
pub use update::*;
pub use wallet::*;
