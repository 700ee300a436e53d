pub mod creator;
pub mod responses;

pub use creator::{ add_creator, delete_creator, get_creator, list_creators, update_creator, Creator };
pub use responses::{ ApiResponse, ErrorDetails };
