#![no_std]
#![no_main]

extern crate user_lib;

use user_lib::{expect_ok, gettimeofday, println, test_end, test_start};

#[unsafe(no_mangle)]
fn main(_argc: usize, _argv: &[&str]) -> i32 {
    test_start!("gettimeofday");
    let start = expect_ok!(gettimeofday(), "gettimeofday");
    for i in 0..30000 {
        core::hint::black_box(i);
    }
    let end = expect_ok!(gettimeofday(), "gettimeofday");
    println!("  gettimeofday success.");
    println!("  start:{}, end:{}", start.into_usec(), end.into_usec());
    println!("  interval: {}us", end.usec_since(&start));
    test_end!("gettimeofday");
    if end >= start { 0 } else { -1 }
}
