pub mod providers;
pub mod recommendation;
