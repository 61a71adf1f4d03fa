mod field;
pub use field::*;

mod particle;
pub use particle::*;

mod pointer;
pub use pointer::*;

mod random;
pub use random::*;

mod settings;
pub use settings::*;

mod surface;
pub use surface::*;

mod viewport;
pub use viewport::*;
