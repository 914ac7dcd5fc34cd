pub mod decode;
pub mod encode;
pub mod input;
pub mod options;
pub mod render;
pub mod trace;

pub use ::message;
