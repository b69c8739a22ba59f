pub mod badge;
pub mod number_format;
