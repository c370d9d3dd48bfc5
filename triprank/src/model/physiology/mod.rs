pub mod calorie_ops;
