#![no_std]
#![no_main]

extern crate user_lib;

use user_lib::{brk, expect_ok, println, sbrk, test_end, test_start};

#[unsafe(no_mangle)]
fn main(_argc: usize, _argv: &[&str]) -> i32 {
    test_start!("brk");
    let cur = expect_ok!(brk(0), "brk(0)");
    println!("  Before alloc,heap pos: {:#x}", cur);
    let moved = expect_ok!(brk(cur + 64), "brk");
    println!("  After alloc,heap pos: {:#x}", moved);
    let old = expect_ok!(sbrk(64), "sbrk");
    let now = expect_ok!(brk(0), "brk(0)");
    println!("  Alloc again,heap pos: {:#x}", now);

    let ok = moved == cur + 64 && old == moved && now == cur + 128;
    if ok {
        // SAFETY: [cur, now) was just handed to this process and nothing else uses it.
        let heap = unsafe { core::slice::from_raw_parts_mut(cur as *mut u8, now - cur) };
        heap.fill(0xab);
    }
    test_end!("brk");
    if ok { 0 } else { -1 }
}
