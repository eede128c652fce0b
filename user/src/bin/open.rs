#![no_std]
#![no_main]

extern crate user_lib;

use user_lib::{
    OpenFlags, SysError, SyscallErr, Whence, close, expect_ok, getcwd, lseek, open, println,
    read, test_end, test_start, unlink, write_all,
};

const PATH: &str = "test_open.txt";
const TEXT: &[u8] = b"Hi, this is a text file.\nsyscalls testing success!\n";

#[unsafe(no_mangle)]
fn main(_argc: usize, _argv: &[&str]) -> i32 {
    test_start!("open");
    println!("  cwd: {}", expect_ok!(getcwd(), "getcwd"));
    let fd = expect_ok!(
        open(PATH, OpenFlags::O_CREAT | OpenFlags::O_RDWR | OpenFlags::O_TRUNC),
        "open"
    );
    println!("  fd = {}", fd);
    expect_ok!(write_all(fd, TEXT), "write");
    expect_ok!(lseek(fd, 0, Whence::Set), "lseek");

    let mut buf = [0u8; 256];
    let size = expect_ok!(read(fd, &mut buf), "read");
    let mut ok = fd > 2 && &buf[..size] == TEXT;
    if let Ok(text) = core::str::from_utf8(&buf[..size]) {
        println!("{}", text);
    }

    expect_ok!(close(fd), "close");
    // A second close is an error the caller sees, nothing more.
    if close(fd) != Err(SyscallErr::from(SysError::EBADF)) {
        println!("  double close was not refused");
        ok = false;
    }
    expect_ok!(unlink(PATH), "unlink");
    if open(PATH, OpenFlags::O_RDONLY) != Err(SyscallErr::from(SysError::ENOENT)) {
        println!("  {} still exists", PATH);
        ok = false;
    }
    test_end!("open");
    if ok { 0 } else { -1 }
}
