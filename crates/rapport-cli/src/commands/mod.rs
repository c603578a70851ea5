//! Command implementations.

pub mod compress;
pub mod encode;
pub mod interpret;
pub mod parse;
pub mod update;

pub use self::compress::execute_compress;
pub use self::encode::execute_encode;
pub use self::interpret::execute_interpret;
pub use self::parse::execute_parse;
pub use self::update::execute_update;
