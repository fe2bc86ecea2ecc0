mod bool;
mod number;
mod validated;
mod word;

pub use bool::*;
pub use number::*;
pub use validated::*;
pub use word::*;
