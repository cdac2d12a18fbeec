//! Pages

pub mod architecture;
pub mod home;
pub mod supervised;
pub mod unsupervised;

pub use architecture::Architecture;
pub use home::Home;
pub use supervised::Supervised;
pub use unsupervised::Unsupervised;
