pub mod shootnscoreit;
