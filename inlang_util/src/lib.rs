pub mod constants;
pub mod io;
