pub mod pointer;

pub use pointer::PointerBinding;
