pub mod ask;
pub mod catalog;
pub mod clear_chat;
pub mod run;
