pub mod a001_work_order;
