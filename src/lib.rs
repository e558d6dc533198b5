pub mod config;
pub mod decode;
pub mod duration;
pub mod environment;
pub mod errors;
pub mod expertise;
pub mod fetch;
pub mod filter;
pub mod nullable;
pub mod pipeline;
pub mod report;
pub mod session;
pub mod timestamp;
pub mod urls;
