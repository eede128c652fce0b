#![no_std]
#![no_main]

extern crate user_lib;

use user_lib::{EXEC_FAILED_EXIT, Fork, SysError, eprintln, execve, exit, fork, println, wait};

const HARNESS: &str = "usertests";

/// Starts the harness, then reaps everything that ends up parented here
/// until no child is left.
#[unsafe(no_mangle)]
fn main(_argc: usize, _argv: &[&str]) -> i32 {
    let harness = match fork() {
        Ok(Fork::Child) => {
            let err = execve(HARNESS, &[HARNESS], &[]);
            eprintln!("initproc: cannot exec {}: {}", HARNESS, err);
            exit(EXEC_FAILED_EXIT);
        }
        Ok(Fork::Parent(pid)) => pid,
        Err(err) => {
            eprintln!("initproc: fork failed: {}", err);
            return -1;
        }
    };

    let mut aggregate = -1;
    loop {
        match wait() {
            Ok((pid, status)) if pid == harness => {
                aggregate = status.code().unwrap_or(-1);
                println!("[initproc] {} exited with {}", HARNESS, aggregate);
            }
            Ok((pid, status)) => {
                println!("[initproc] released a zombie process, pid={}, exit_code={}", pid, status.raw());
            }
            Err(err) if err == SysError::ECHILD => break,
            Err(err) => {
                eprintln!("initproc: wait failed: {}", err);
                break;
            }
        }
    }
    aggregate
}
