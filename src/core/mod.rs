pub mod calculator;
pub mod game;
pub mod generator;
pub mod report;
