#[cfg(feature = "backend-fontdue")]
pub mod fontdue;
#[cfg(feature = "backend-mock")]
pub mod mock;

#[cfg(feature = "backend-fontdue")]
pub use fontdue::FontdueRenderer;
#[cfg(feature = "backend-mock")]
pub use mock::MockRenderer;
