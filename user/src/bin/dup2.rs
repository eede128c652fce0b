#![no_std]
#![no_main]

extern crate user_lib;

use user_lib::{STDOUT, close, dup2, expect_ok, println, test_end, test_start, write_all};

const TARGET: usize = 100;

#[unsafe(no_mangle)]
fn main(_argc: usize, _argv: &[&str]) -> i32 {
    test_start!("dup2");
    let fd = expect_ok!(dup2(STDOUT, TARGET), "dup2");
    expect_ok!(write_all(fd, b"  from fd 100\n"), "write");
    // Rebinding over an open descriptor closes it first.
    let again = expect_ok!(dup2(STDOUT, TARGET), "dup2 over open fd");
    let same = expect_ok!(dup2(STDOUT, STDOUT), "dup2 onto itself");
    expect_ok!(close(TARGET), "close");

    let ok = fd == TARGET && again == TARGET && same == STDOUT;
    if !ok {
        println!("  dup2 error: {} {} {}", fd, again, same);
    }
    test_end!("dup2");
    if ok { 0 } else { -1 }
}
