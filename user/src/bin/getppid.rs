#![no_std]
#![no_main]

extern crate user_lib;

use user_lib::{
    Fork, exit, expect_ok, fork, getpid, getppid, println, test_end, test_start, wait,
};

#[unsafe(no_mangle)]
fn main(_argc: usize, _argv: &[&str]) -> i32 {
    test_start!("getppid");
    let ppid = getppid();
    let mut ok = ppid > 0;
    if ok {
        println!("  getppid success. ppid : {}", ppid);
    } else {
        println!("  getppid error. ppid : {}", ppid);
    }

    // A child's parent is the caller of fork.
    let me = getpid();
    if expect_ok!(fork(), "fork") == Fork::Child {
        exit(if getppid() == me { 0 } else { 1 });
    }
    let (_, status) = expect_ok!(wait(), "wait");
    if status.code() != Some(0) {
        println!("  child did not see {} as its parent", me);
        ok = false;
    }
    test_end!("getppid");
    if ok { 0 } else { -1 }
}
