#![no_std]
#![no_main]

extern crate alloc;
extern crate user_lib;

use alloc::boxed::Box;

use user_lib::{Fork, exit, expect_ok, fork, getpid, println, test_end, test_start, wait};

#[unsafe(no_mangle)]
fn main(_argc: usize, _argv: &[&str]) -> i32 {
    test_start!("fork");
    let me = getpid();
    let mut marker = Box::new(7usize);
    let child = match expect_ok!(fork(), "fork") {
        Fork::Child => {
            // The parent's copy must not see this.
            *marker = 42;
            println!("  child process.");
            exit(if *marker == 42 { 0 } else { 1 });
        }
        Fork::Parent(pid) => pid,
    };
    println!("  parent process. child pid = {}", child);

    let (reaped, status) = expect_ok!(wait(), "wait");
    let ok = child != me && reaped == child && status.code() == Some(0) && *marker == 7;
    if ok {
        println!("  fork success.");
    } else {
        println!("  fork error. pid {} reaped {} marker {}", child, reaped, *marker);
    }
    test_end!("fork");
    if ok { 0 } else { -1 }
}
