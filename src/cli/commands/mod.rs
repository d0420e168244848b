pub mod helper;
pub mod init;
pub mod jump;
pub mod load;
pub mod search;

mod command_result;

pub use command_result::*;
