pub mod log;

pub use log::{
    enabled,
    global_log_level,
    set_global_log_level,
    set_global_log_sink,
    LogLevel,
    LogSink,
    StderrSink,
};
