#![no_std]
#![no_main]

extern crate user_lib;

use user_lib::{getpid, println, test_end, test_start};

#[unsafe(no_mangle)]
fn main(_argc: usize, _argv: &[&str]) -> i32 {
    test_start!("getpid");
    let pid = getpid();
    println!("  getpid success.\n  pid = {}", pid);
    test_end!("getpid");
    if pid > 0 { 0 } else { -1 }
}
