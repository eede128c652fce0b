#![no_std]
#![no_main]

extern crate user_lib;

use user_lib::{
    Fork, SysError, exit, expect_ok, fork, getpid, println, test_end, test_start, wait,
};

#[unsafe(no_mangle)]
fn main(_argc: usize, _argv: &[&str]) -> i32 {
    test_start!("wait");
    let child = match expect_ok!(fork(), "fork") {
        Fork::Child => {
            println!("  This is child process {}", getpid());
            exit(0);
        }
        Fork::Parent(pid) => pid,
    };
    let (reaped, status) = expect_ok!(wait(), "wait");
    let mut ok = reaped == child && status.code() == Some(0);
    if ok {
        println!("  wait child success.\n  wstatus: {}", status.raw());
    } else {
        println!("  wait child error. reaped {} of {}", reaped, child);
    }

    // Nothing is left to reap.
    match wait() {
        Err(err) if err == SysError::ECHILD => println!("  no child left: {}", err),
        other => {
            println!("  wait without children returned {:?}", other);
            ok = false;
        }
    }
    test_end!("wait");
    if ok { 0 } else { -1 }
}
