pub mod appointment;
pub mod enums;
pub mod practitioner;
pub mod question;
pub mod report;
pub mod symptoms;

pub use appointment::*;
pub use enums::*;
pub use practitioner::*;
pub use question::*;
pub use report::*;
pub use symptoms::*;
