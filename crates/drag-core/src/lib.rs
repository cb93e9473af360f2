pub mod camera;
pub mod constants;
pub mod error;
pub mod event;
pub mod geom;
pub mod interactor;
pub mod object;
pub mod pick;
pub mod touch;
pub mod viewport;

pub use camera::*;
pub use constants::*;
pub use error::*;
pub use event::*;
pub use geom::*;
pub use interactor::*;
pub use object::*;
pub use pick::*;
pub use touch::*;
pub use viewport::*;
