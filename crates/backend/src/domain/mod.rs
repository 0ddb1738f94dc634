pub mod waiting_list;
