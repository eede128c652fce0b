#![no_std]
#![no_main]

extern crate user_lib;

use user_lib::{expect_ok, gettimeofday, println, sleep, test_end, test_start};

const SLEEP_MS: usize = 1000;

#[unsafe(no_mangle)]
fn main(_argc: usize, _argv: &[&str]) -> i32 {
    test_start!("sleep");
    let start = expect_ok!(gettimeofday(), "gettimeofday");
    expect_ok!(sleep(SLEEP_MS), "sleep");
    let end = expect_ok!(gettimeofday(), "gettimeofday");
    let slept = end.usec_since(&start) / 1000;
    let ok = slept >= SLEEP_MS;
    if ok {
        println!("  sleep success.");
    } else {
        println!("  sleep error: woke after {}ms", slept);
    }
    test_end!("sleep");
    if ok { 0 } else { -1 }
}
