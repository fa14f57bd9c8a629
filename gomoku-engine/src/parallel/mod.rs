mod driver;
mod pool;

pub use driver::ParallelDriver;
pub use pool::WorkerPool;
