use systype::time::{TimeSpec, TimeVal};

use crate::{
    error::{SysResult, check},
    syscall::*,
};

pub fn gettimeofday() -> SysResult<TimeVal> {
    let mut time_val = TimeVal::default();
    check(sys_gettimeofday(&mut time_val, 0))?;
    Ok(time_val)
}

/// Sleeps for `req`. An interrupted sleep reports the error and drops the
/// remaining time.
pub fn nanosleep(req: &TimeSpec) -> SysResult<()> {
    let mut rem = TimeSpec::default();
    check(sys_nanosleep(req, &mut rem)).map(|_| ())
}

pub fn sleep(ms: usize) -> SysResult<()> {
    nanosleep(&TimeSpec::from_ms(ms))
}
