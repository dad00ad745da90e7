pub mod exchanges;
