pub mod aggregate;

pub use aggregate::WorkOrder;
