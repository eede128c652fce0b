#![no_std]
#![no_main]

extern crate user_lib;

use user_lib::{println, test_end};

#[unsafe(no_mangle)]
fn main(_argc: usize, argv: &[&str]) -> i32 {
    println!("  I am test_echo.");
    println!("  argv[0] = {}", argv.first().unwrap_or(&""));
    test_end!("exec");
    0
}
