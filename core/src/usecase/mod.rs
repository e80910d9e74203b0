pub mod planner;

#[cfg(test)]
mod planner_test;
