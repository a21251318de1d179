pub mod endpoint;
pub mod latency;
pub mod run;
