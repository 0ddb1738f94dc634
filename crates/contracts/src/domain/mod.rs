pub mod tickets;
pub mod waiting_list;
