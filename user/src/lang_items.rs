use core::panic::PanicInfo;

use config::harness::PANIC_EXIT;

use crate::syscall::sys_exit;

#[panic_handler]
fn panic_handler(panic_info: &PanicInfo) -> ! {
    let err = panic_info.message();
    if let Some(location) = panic_info.location() {
        eprintln!(
            "Panicked at {}:{}, {}",
            location.file(),
            location.line(),
            err
        );
    } else {
        eprintln!("Panicked: {}", err);
    }
    // Trap directly: `exit` itself panics if the kernel lets it return.
    sys_exit(PANIC_EXIT);
    loop {}
}
