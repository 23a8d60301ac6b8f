mod common;
mod personal;
mod real_food;
