#[cfg(test)]
mod tests;

pub mod config;
pub mod http;
pub mod labels;
pub mod metrics;
pub mod upstream;
