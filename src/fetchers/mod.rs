pub mod base;
pub mod alphavantage;
