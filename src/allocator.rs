use linked_list_allocator::LockedHeap;

/// Kernel heap size. Plenty for the namespace table plus shell buffers.
pub const HEAP_SIZE: usize = 1024 * 1024;

/// Backing storage for the heap, handed to the allocator at init.
static mut HEAP_SPACE: [u8; HEAP_SIZE] = [0; HEAP_SIZE];

#[cfg_attr(not(test), global_allocator)]
static ALLOCATOR: LockedHeap = LockedHeap::empty();

/// Initialize the heap allocator.
/// Must be called before any heap allocations occur.
pub fn init() {
    unsafe {
        let heap_start = &raw mut HEAP_SPACE as *mut u8;
        ALLOCATOR.lock().init(heap_start, HEAP_SIZE);
    }
}

/// Returns (used, free) bytes in the heap.
pub fn heap_stats() -> (usize, usize) {
    let allocator = ALLOCATOR.lock();
    (allocator.used(), allocator.free())
}
