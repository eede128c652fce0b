#![no_std]
#![no_main]

extern crate user_lib;

use user_lib::{exec, println, test_start};

#[unsafe(no_mangle)]
fn main(_argc: usize, _argv: &[&str]) -> i32 {
    test_start!("exec");
    // On success test_echo ends this process with its own banner.
    let err = exec("test_echo");
    println!("  execve error: {}", err);
    -1
}
