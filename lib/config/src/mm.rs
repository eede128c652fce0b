//! Module defining constants related to user memory management.

use bitflags::bitflags;

/// Size of the static area backing the user heap allocator.
pub const USER_HEAP_SIZE: usize = 0x32000;

/// Size of a page on the target.
pub const PAGE_SIZE: usize = 0x1000;

/// The value libc hands back from a failed `mmap`.
pub const MAP_FAILED: usize = usize::MAX;

/// Largest errno a kernel may encode in a pointer-sized return. Returns in
/// `-MAX_ERRNO..=-1` are errors, anything else is an address.
pub const MAX_ERRNO: isize = 4095;

bitflags! {
    /// Memory protection/access flags for system calls like `mmap`.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MmapProt: i32 {
        /// No access.
        const PROT_NONE = 0x0;
        /// Page can be read.
        const PROT_READ = 0x1;
        /// Page can be written.
        const PROT_WRITE = 0x2;
        /// Page can be executed.
        const PROT_EXEC = 0x4;
    }
}

bitflags! {
    /// Flags for `mmap` system call that specify how the memory should be mapped.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MmapFlags: i32 {
        /// Back the mapping with a file. Linux ignores it, kept for C compatibility.
        const MAP_FILE = 0x00;
        // Sharing types (must choose one and only one of these).
        /// Share changes.
        const MAP_SHARED = 0x01;
        /// Changes are private.
        const MAP_PRIVATE = 0x02;
        const MAP_TYPE_MASK = 0x03;

        // Other flags
        /// Interpret addr exactly.
        const MAP_FIXED = 0x10;
        /// Don't use a file.
        const MAP_ANONYMOUS = 0x20;
    }
}

impl MmapFlags {
    /// Exactly one sharing type must be requested.
    pub fn has_valid_sharing(&self) -> bool {
        let ty = self.intersection(Self::MAP_TYPE_MASK);
        ty == Self::MAP_SHARED || ty == Self::MAP_PRIVATE
    }
}

/// Rounds `len` up to a whole number of pages, `None` if that is past
/// the end of the address space.
pub const fn page_round_up(len: usize) -> Option<usize> {
    match len.checked_add(PAGE_SIZE - 1) {
        Some(end) => Some(end & !(PAGE_SIZE - 1)),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sharing_type_must_be_unique() {
        assert!(MmapFlags::MAP_SHARED.has_valid_sharing());
        assert!((MmapFlags::MAP_PRIVATE | MmapFlags::MAP_ANONYMOUS).has_valid_sharing());
        assert!(!MmapFlags::MAP_ANONYMOUS.has_valid_sharing());
        assert!(!MmapFlags::MAP_TYPE_MASK.has_valid_sharing());
    }

    #[test]
    fn page_rounding() {
        assert_eq!(page_round_up(0), Some(0));
        assert_eq!(page_round_up(1), Some(PAGE_SIZE));
        assert_eq!(page_round_up(PAGE_SIZE), Some(PAGE_SIZE));
        assert_eq!(page_round_up(PAGE_SIZE + 1), Some(2 * PAGE_SIZE));
    }

    #[test]
    fn rounding_past_the_address_space_fails() {
        let last_page = usize::MAX - (PAGE_SIZE - 1);
        assert_eq!(page_round_up(last_page), Some(last_page));
        assert_eq!(page_round_up(last_page + 1), None);
        assert_eq!(page_round_up(usize::MAX), None);
    }
}
