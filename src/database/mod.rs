pub mod channel;
pub mod logo_table;

pub use logo_table::LogoTable;
