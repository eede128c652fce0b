#![no_std]
#![no_main]

extern crate alloc;
extern crate user_lib;

use alloc::vec::Vec;

use user_lib::{
    Fork, STDOUT, close, exit, expect_ok, fork, pipe, println, read, test_end, test_start,
    wait, write, write_all,
};

const DATA: &[u8] = b"  Write to pipe successfully.\n";

#[unsafe(no_mangle)]
fn main(_argc: usize, _argv: &[&str]) -> i32 {
    test_start!("pipe");
    let ends = expect_ok!(pipe(), "pipe");
    if expect_ok!(fork(), "fork") == Fork::Child {
        close(ends.read).ok();
        let sent = write_all(ends.write, DATA);
        close(ends.write).ok();
        exit(if sent.is_ok() { 0 } else { 1 });
    }

    // Our copy of the write end has to go, or the read below never ends.
    expect_ok!(close(ends.write), "close write end");
    let mut received = Vec::new();
    let mut byte = [0u8; 1];
    loop {
        match expect_ok!(read(ends.read, &mut byte), "read") {
            0 => break,
            _ => {
                received.push(byte[0]);
                write(STDOUT, &byte).ok();
            }
        }
    }
    // End of stream stays end of stream.
    let drained = expect_ok!(read(ends.read, &mut byte), "read after end") == 0;
    expect_ok!(close(ends.read), "close read end");
    let (_, status) = expect_ok!(wait(), "wait");

    let ok = received == DATA && drained && status.code() == Some(0);
    if !ok {
        println!("  pipe error: got {} of {} bytes", received.len(), DATA.len());
    }
    test_end!("pipe");
    if ok { 0 } else { -1 }
}
