mod common;
mod cutoff;
mod engine;
