pub mod health;
pub mod histories;
