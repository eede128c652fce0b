#![no_std]
#![no_main]

extern crate user_lib;

use user_lib::{
    MmapFlags, MmapProt, OpenFlags, Whence, close, expect_ok, fstat, lseek, mmap, open,
    println, read, test_end, test_start, unlink, write_all,
};

const PATH: &str = "test_mmap.txt";
const TEXT: &[u8] = b"  Hello, mmap successfully!";

#[unsafe(no_mangle)]
fn main(_argc: usize, _argv: &[&str]) -> i32 {
    test_start!("mmap");
    let fd = expect_ok!(
        open(PATH, OpenFlags::O_RDWR | OpenFlags::O_CREAT | OpenFlags::O_TRUNC),
        "open"
    );
    expect_ok!(write_all(fd, TEXT), "write");
    let stat = expect_ok!(fstat(fd), "fstat");
    let size = stat.size();
    println!("  file len: {}, regular: {}", size, stat.is_regular());

    let prot = MmapProt::PROT_READ | MmapProt::PROT_WRITE;
    let flags = MmapFlags::MAP_FILE | MmapFlags::MAP_SHARED;
    let mut ok = true;
    let mut mapping = match mmap(0, size, prot, flags, Some(fd), 0) {
        Ok(mapping) => mapping,
        Err(err) => {
            println!("  mmap error: {}", err);
            close(fd).ok();
            return -1;
        }
    };
    // SAFETY: the mapping is ours alone and released below.
    let bytes = unsafe { mapping.as_mut_slice() };
    if let Ok(text) = core::str::from_utf8(bytes) {
        println!("  mmap content: {}", text);
    }
    ok &= bytes == TEXT;
    // Shared mappings write back into the file.
    bytes[2] = b'J';
    expect_ok!(mapping.unmap(), "munmap");

    let mut buf = [0u8; 64];
    expect_ok!(lseek(fd, 0, Whence::Set), "lseek");
    let n = expect_ok!(read(fd, &mut buf), "read");
    ok &= n == TEXT.len() && buf[2] == b'J';

    // Nothing to map is never mistaken for an address.
    ok &= mmap(0, 0, prot, flags, Some(fd), 0).is_err();
    expect_ok!(close(fd), "close");
    ok &= mmap(0, size, prot, flags, Some(fd), 0).is_err();
    unlink(PATH).ok();

    if !ok {
        println!("  mmap error.");
    }
    test_end!("mmap");
    if ok { 0 } else { -1 }
}
