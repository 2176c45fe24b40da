//! Expose marktoc's command line plumbing so it can be driven from tests and
//! the xtask. The TOC engine itself lives in `marktoc-core`.
pub mod cli;
pub mod run;
