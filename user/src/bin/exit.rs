#![no_std]
#![no_main]

extern crate user_lib;

use user_lib::{Fork, WAIT_STATUS_LAYOUT, exit, fork, println, test_end, test_start, wait};

/// Forks a child that exits with `code` and checks what the parent reaps.
fn exits_with(code: i32) -> bool {
    let child = match fork() {
        Ok(Fork::Child) => exit(code),
        Ok(Fork::Parent(pid)) => pid,
        Err(err) => {
            println!("  fork failed: {}", err);
            return false;
        }
    };
    match wait() {
        Ok((reaped, status)) => {
            println!("  waitret:{} cpid:{} child_return:{}", reaped, child, status.raw());
            reaped == child && status.code() == Some(WAIT_STATUS_LAYOUT.observed_code(code))
        }
        Err(err) => {
            println!("  wait failed: {}", err);
            false
        }
    }
}

#[unsafe(no_mangle)]
fn main(_argc: usize, _argv: &[&str]) -> i32 {
    test_start!("exit");
    // A code wider than a byte shows whether the status word truncates.
    let ok = exits_with(0) & exits_with(98988);
    if ok {
        println!("  exit OK.");
    } else {
        println!("  exit ERR.");
    }
    test_end!("exit");
    if ok { 0 } else { -1 }
}
