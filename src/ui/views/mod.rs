pub mod error;
pub mod loading;
pub mod question;
pub mod result;
