//! Banners and checks shared by the conformance programs.

/// Prints the opening banner of a conformance program.
#[macro_export]
macro_rules! test_start {
    ($name:expr) => {
        $crate::println!(
            "========== START {}{}{} ==========",
            $crate::console::color::YELLOW,
            $name,
            $crate::console::color::NONE
        )
    };
}

#[macro_export]
macro_rules! test_end {
    ($name:expr) => {
        $crate::println!("==========  END  {} ==========", $name)
    };
}

/// Unwraps a syscall result inside a conformance program's `main`, or
/// prints what failed and returns `-1` from it.
#[macro_export]
macro_rules! expect_ok {
    ($call:expr, $what:literal) => {
        match $call {
            Ok(value) => value,
            Err(err) => {
                $crate::console::print(format_args!(concat!("  ", $what, " failed: {}\n"), err));
                return -1;
            }
        }
    };
}
