pub mod complex;
