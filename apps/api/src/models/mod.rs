pub mod conversation;
pub mod question;
