#![no_std]
#![no_main]

extern crate user_lib;

use user_lib::{
    Fork, exit, expect_ok, fork, getpid, println, sched_yield, test_end, test_start, wait,
};

const CHILDREN: usize = 3;
const ROUNDS: usize = 5;

#[unsafe(no_mangle)]
fn main(_argc: usize, _argv: &[&str]) -> i32 {
    test_start!("yield");
    for _ in 0..CHILDREN {
        if expect_ok!(fork(), "fork") == Fork::Child {
            let pid = getpid();
            for round in 0..ROUNDS {
                if sched_yield().is_err() {
                    exit(1);
                }
                println!("  I am child process: {}. iteration {}.", pid, round);
            }
            exit(0);
        }
    }

    let mut ok = true;
    for _ in 0..CHILDREN {
        let (_, status) = expect_ok!(wait(), "wait");
        ok &= status.code() == Some(0);
    }
    test_end!("yield");
    if ok { 0 } else { -1 }
}
