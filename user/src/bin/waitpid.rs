#![no_std]
#![no_main]

extern crate user_lib;

use user_lib::{
    Fork, WAIT_STATUS_LAYOUT, WaitOptions, exit, expect_ok, fork, println, sched_yield,
    test_end, test_start, waitpid,
};

const CHILD_EXIT: i32 = 3;

#[unsafe(no_mangle)]
fn main(_argc: usize, _argv: &[&str]) -> i32 {
    test_start!("waitpid");
    let child = match expect_ok!(fork(), "fork") {
        Fork::Child => {
            for i in 0..1000 {
                core::hint::black_box(i);
            }
            sched_yield().ok();
            println!("  This is child process");
            exit(CHILD_EXIT);
        }
        Fork::Parent(pid) => pid,
    };

    let (reaped, status) = expect_ok!(waitpid(child as isize, WaitOptions::empty()), "waitpid");
    let ok = reaped == child && status.code() == Some(WAIT_STATUS_LAYOUT.observed_code(CHILD_EXIT));
    if ok {
        println!("  waitpid successfully.\n  wstatus: {:x}", status.raw());
    } else {
        println!(
            "  ret: {}\n  cpid: {}\n  wstatus: {:?}\n  waitpid error.",
            reaped,
            child,
            status.exit_status()
        );
    }
    test_end!("waitpid");
    if ok { 0 } else { -1 }
}
