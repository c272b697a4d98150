use x86_64::instructions::port::Port;

/// PIT input clock frequency in Hz.
const PIT_INPUT_HZ: u32 = 1_193_182;

/// Tick rate channel 0 is programmed to. The uptime counter divides by this.
pub const TICK_HZ: u32 = 50;

const CHANNEL0_PORT: u16 = 0x40;
const COMMAND_PORT: u16 = 0x43;

/// Channel 0, lobyte/hibyte access, square-wave mode.
const COMMAND_SQUARE_WAVE: u8 = 0x36;

pub fn init() {
    let divisor = (PIT_INPUT_HZ / TICK_HZ) as u16;

    let mut command: Port<u8> = Port::new(COMMAND_PORT);
    let mut channel0: Port<u8> = Port::new(CHANNEL0_PORT);
    unsafe {
        command.write(COMMAND_SQUARE_WAVE);
        channel0.write((divisor & 0xFF) as u8);
        channel0.write((divisor >> 8) as u8);
    }

    crate::log_info!("PIT channel 0 programmed to {} Hz.", TICK_HZ);
}
