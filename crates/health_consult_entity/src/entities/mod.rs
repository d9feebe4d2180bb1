pub mod prelude;

pub mod consultation;
