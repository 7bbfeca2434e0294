pub mod list;
pub mod maxima;
pub mod optimize;
