pub mod brute_force;
pub mod dynamic_programming;
pub mod greedy;
