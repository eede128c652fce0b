#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), feature(linkage))]
#![cfg_attr(not(test), feature(alloc_error_handler))]

#[macro_use]
pub mod console;

mod error;
pub mod fs;
pub mod harness;
#[cfg(not(test))]
mod lang_items;
mod logging;
pub mod mm;
pub mod process;
#[allow(unused)]
mod syscall;
pub mod testing;
pub mod time;

extern crate alloc;

pub use config::{
    harness::EXEC_FAILED_EXIT,
    mm::{MmapFlags, MmapProt, PAGE_SIZE, page_round_up},
    process::{ExitStatus, StatusLayout, WAIT_STATUS_LAYOUT, WaitOptions},
    vfs::{OpenFlags, Whence},
};
pub use error::{SysResult, SyscallErr};
pub use fs::*;
pub use mm::*;
pub use process::*;
pub use syscall::SyscallNo;
pub use systype::{
    error::SysError,
    stat::Kstat,
    time::{TimeSpec, TimeVal},
};
pub use time::*;

#[cfg(not(test))]
mod runtime {
    use alloc::vec::Vec;
    use core::ffi::{CStr, c_char};

    use buddy_system_allocator::LockedHeap;
    use config::mm::USER_HEAP_SIZE;

    use crate::exit;

    // Note that heap space is allocated in .data segment
    static mut HEAP_SPACE: [u8; USER_HEAP_SIZE] = [0; USER_HEAP_SIZE];

    #[global_allocator]
    static HEAP: LockedHeap<32> = LockedHeap::empty();

    #[alloc_error_handler]
    pub fn handle_alloc_error(layout: core::alloc::Layout) -> ! {
        panic!("Heap allocation error, layout = {:?}", layout);
    }

    #[allow(static_mut_refs)]
    #[unsafe(no_mangle)]
    #[unsafe(link_section = ".text.entry")]
    pub extern "C" fn _start(argc: usize, argv: usize) -> ! {
        unsafe {
            HEAP.lock()
                .init(HEAP_SPACE.as_ptr() as usize, USER_HEAP_SIZE);
        }
        logger::init();

        let mut v: Vec<&'static str> = Vec::with_capacity(argc);
        for i in 0..argc {
            let str_start = unsafe {
                ((argv + i * core::mem::size_of::<usize>()) as *const usize).read_volatile()
            };
            // Arguments that are not UTF-8 are passed on as empty strings.
            let arg = unsafe { CStr::from_ptr(str_start as *const c_char) };
            v.push(arg.to_str().unwrap_or(""));
        }
        let exit_code = main(argc, v.as_slice());
        log::trace!("[_start] {} exits with {}", v.first().unwrap_or(&"?"), exit_code);
        exit(exit_code);
    }

    #[linkage = "weak"]
    #[unsafe(no_mangle)]
    fn main(_: usize, _: &[&str]) -> i32 {
        panic!("Cannot find main!");
    }
}
