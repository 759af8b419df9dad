pub mod consts;
pub mod error;
pub mod frame;
pub mod color;
pub mod detection;
pub mod io;
pub mod node;
