pub mod immigration;
