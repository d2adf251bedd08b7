//! Minimal local map/reduce: one concurrent map task per input unit, a
//! join-all barrier, then a sequential fold of the partial results.
//!
//! Pick an input variant and a computation, hand the driver a config, get
//! the folded value back:
//!
//! ```no_run
//! use localmr::{mapreduce, Config, LineCountWorker, PathInput, DATA_DIR};
//!
//! # async fn run() -> localmr::Result<()> {
//! let mut config = Config::new();
//! config.insert(DATA_DIR.to_string(), "input".to_string());
//! let total = mapreduce::<LineCountWorker<PathInput>>(&config).await?;
//! println!("{total} lines");
//! # Ok(())
//! # }
//! ```

pub mod apps;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod worker;

pub use apps::{LineCountWorker, WordCountWorker};
pub use config::{Config, DATA_DIR};
pub use engine::{execute, mapreduce};
pub use error::{Error, Result};
pub use input::{InputSource, PathInput};
pub use worker::{create_workers, Worker};
