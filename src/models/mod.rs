pub mod generate;
pub mod request;
pub mod response;
