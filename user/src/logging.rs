use core::fmt;

use logger::LogInterface;

use crate::{console::eprint, process::getpid};

fn eprint_in_color(args: fmt::Arguments, color_code: u8) {
    eprint(format_args!("\u{1B}[{}m{}\u{1B}[0m", color_code, args));
}

struct LogInterfaceImpl;

#[crate_interface::impl_interface]
impl LogInterface for LogInterfaceImpl {
    fn print_log(record: &log::Record) {
        eprint_in_color(
            format_args!(
                "[{:>5}][pid {}] {}\n",
                record.level(),
                getpid(),
                record.args()
            ),
            logger::level2color(record.level()),
        );
    }
}
