pub mod day_1;
pub mod day_4;
pub mod day_5;
pub mod day_7;
pub mod day_9;
