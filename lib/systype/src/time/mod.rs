mod time_spec;
mod time_val;

pub use time_spec::TimeSpec;
pub use time_val::TimeVal;
