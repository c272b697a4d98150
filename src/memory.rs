use multiboot2::BootInformation;

/// Memory subsystem bring-up: report the Multiboot2 memory map, then hand
/// the static heap arena to the global allocator.
pub fn init(multiboot_info_addr: usize) {
    let boot_info = unsafe { BootInformation::load(multiboot_info_addr as *const _) }
        .expect("Failed to load Multiboot2 info!");
    let memory_map_tag = boot_info.memory_map_tag().expect("Memory map tag required");

    let areas = memory_map_tag.memory_areas();
    let total_bytes: u64 = areas.iter().map(|area| area.size()).sum();
    crate::log_info!(
        "Physical memory map: {} regions, {} MiB total.",
        areas.len(),
        total_bytes / (1024 * 1024)
    );

    crate::allocator::init();

    // Validate dynamic allocation before anything depends on it
    let probe = alloc::vec![0u8; 256];
    let (used, free) = crate::allocator::heap_stats();
    crate::log_info!(
        "Heap allocator initialized: {} bytes used, {} free (probe at {:p}).",
        used,
        free,
        probe.as_slice()
    );
}
