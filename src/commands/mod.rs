pub mod assess;
pub mod check;
pub mod score;
