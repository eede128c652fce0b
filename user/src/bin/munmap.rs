#![no_std]
#![no_main]

extern crate user_lib;

use user_lib::{
    MmapFlags, MmapProt, OpenFlags, SysError, close, expect_ok, fstat, mmap, munmap, open,
    page_round_up, println, test_end, test_start, unlink, write_all,
};

const PATH: &str = "test_munmap.txt";

#[unsafe(no_mangle)]
fn main(_argc: usize, _argv: &[&str]) -> i32 {
    test_start!("munmap");
    let fd = expect_ok!(
        open(PATH, OpenFlags::O_RDWR | OpenFlags::O_CREAT | OpenFlags::O_TRUNC),
        "open"
    );
    expect_ok!(write_all(fd, b"  Hello, mmap successfully!"), "write");
    let size = expect_ok!(fstat(fd), "fstat").size();
    let file_map = expect_ok!(
        mmap(
            0,
            size,
            MmapProt::PROT_READ | MmapProt::PROT_WRITE,
            MmapFlags::MAP_FILE | MmapFlags::MAP_SHARED,
            Some(fd),
            0,
        ),
        "mmap file"
    );
    println!("  file mapped at {:#x}", file_map.addr());
    expect_ok!(file_map.unmap(), "munmap file");
    expect_ok!(close(fd), "close");
    unlink(PATH).ok();

    let len = expect_ok!(page_round_up(size).ok_or(SysError::EINVAL), "page rounding");
    let mut anon = expect_ok!(
        mmap(
            0,
            len,
            MmapProt::PROT_READ | MmapProt::PROT_WRITE,
            MmapFlags::MAP_PRIVATE,
            None,
            0,
        ),
        "mmap anonymous"
    );
    // SAFETY: a private anonymous page nobody else sees.
    let page = unsafe { anon.as_mut_slice() };
    page.fill(0x5a);
    let ok = page.iter().all(|&b| b == 0x5a);
    let (addr, len) = (anon.addr(), anon.len());
    expect_ok!(munmap(addr, len), "munmap anonymous");

    println!("  munmap {}.", if ok { "success" } else { "error" });
    test_end!("munmap");
    if ok { 0 } else { -1 }
}
