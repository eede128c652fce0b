#![no_std]
#![no_main]

extern crate user_lib;

use user_lib::{STDOUT, close, dup, expect_ok, println, test_end, test_start, write_all};

const EXPECTED_FD: usize = 3;

#[unsafe(no_mangle)]
fn main(_argc: usize, _argv: &[&str]) -> i32 {
    test_start!("dup");
    let fd = expect_ok!(dup(STDOUT), "dup");
    println!("  new fd is {}.", fd);
    expect_ok!(write_all(fd, b"  written through the duplicate.\n"), "write");
    expect_ok!(close(fd), "close");
    // Only 0, 1 and 2 are open at start.
    let ok = fd == EXPECTED_FD;
    if !ok {
        println!("  dup error: expected fd {}, got {}", EXPECTED_FD, fd);
    }
    test_end!("dup");
    if ok { 0 } else { -1 }
}
