pub mod document;
pub mod freight;
pub mod maintenance;
pub mod notification;
pub mod order;
pub mod quote;

pub use document::*;
pub use freight::*;
pub use maintenance::*;
pub use notification::*;
pub use order::*;
pub use quote::*;
