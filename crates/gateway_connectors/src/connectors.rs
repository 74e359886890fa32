pub mod paystation;

pub use self::paystation::Paystation;
