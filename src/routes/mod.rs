pub mod health;
pub mod info;
pub mod stats;
pub mod winners;
