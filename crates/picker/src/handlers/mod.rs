pub mod error;
pub mod health;
pub mod leaderboard;
pub mod picks;
pub mod results;

pub use error::AppError;
