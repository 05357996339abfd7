pub mod work_order_status;
