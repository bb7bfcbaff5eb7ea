pub mod wrapper;
