pub mod calculators;
pub mod catch;
pub mod damage;
pub mod engine;
pub mod runner;
pub mod state;

#[cfg(test)]
pub(crate) mod tests;
