// Power-on and reset behavior for both variants.
//
// The reset sequence loads PC from the vector at $FFFC/$FFFD, forces
// SP=$FD, clears A/X/Y, sets the interrupt-disable and unused flags, and
// charges 6 cycles on the NMOS 6502 or 7 on the WDC65C02. Nothing is pushed.

use m6502::{Bus, Memory, Nmos6502, Status, Wdc65c02, CPU};

fn memory_with_reset_vector() -> Memory {
    let mut memory = Memory::new();
    memory.load(0xFFFC, &[0x00, 0x80]);
    memory
}

#[test]
fn nmos_reset_state() {
    let mut cpu = CPU::new(memory_with_reset_vector(), Nmos6502);
    cpu.reset();

    assert_eq!(cpu.registers.program_counter, 0x8000);
    assert_eq!(cpu.registers.stack_pointer.0, 0xFD);
    assert_eq!(cpu.registers.accumulator, 0);
    assert_eq!(cpu.registers.index_x, 0);
    assert_eq!(cpu.registers.index_y, 0);
    assert!(cpu.registers.status.contains(Status::PS_DISABLE_INTERRUPTS));
    assert!(cpu.registers.status.contains(Status::PS_UNUSED));
    assert_eq!(cpu.cycles(), 6);
    assert!(!cpu.is_halted());
}

#[test]
fn wdc65c02_reset_charges_seven_cycles() {
    let mut cpu = CPU::new(memory_with_reset_vector(), Wdc65c02);
    cpu.reset();

    assert_eq!(cpu.registers.program_counter, 0x8000);
    assert_eq!(cpu.cycles(), 7);
}

#[test]
fn nmos_reset_preserves_decimal_flag() {
    let mut cpu = CPU::new(memory_with_reset_vector(), Nmos6502);
    cpu.registers.status.insert(Status::PS_DECIMAL_MODE);
    cpu.reset();
    assert!(cpu.registers.status.contains(Status::PS_DECIMAL_MODE));
}

#[test]
fn wdc65c02_reset_clears_decimal_flag() {
    let mut cpu = CPU::new(memory_with_reset_vector(), Wdc65c02);
    cpu.registers.status.insert(Status::PS_DECIMAL_MODE);
    cpu.reset();
    assert!(!cpu.registers.status.contains(Status::PS_DECIMAL_MODE));
}

#[test]
fn reset_does_not_touch_the_stack() {
    let mut memory = memory_with_reset_vector();
    memory.load(0x01F0, &[0xAA; 0x10]);
    let mut cpu = CPU::new(memory, Nmos6502);
    cpu.reset();
    for offset in 0x01F0..=0x01FF {
        assert_eq!(cpu.memory.read(offset), 0xAA);
    }
}

#[test]
fn pending_reset_outranks_pending_interrupts() {
    let mut cpu = CPU::new(memory_with_reset_vector(), Nmos6502);
    cpu.reset();
    while cpu.cycles() > 0 {
        cpu.step();
    }

    cpu.set_reset();
    cpu.set_nmi();
    cpu.set_irq();
    cpu.step();

    // The reset was serviced; no interrupt entry happened, so nothing was
    // pushed and PC points at the reset target.
    assert_eq!(cpu.registers.program_counter, 0x8000);
    assert_eq!(cpu.cycles(), 6);
    assert_eq!(cpu.registers.stack_pointer.0, 0xFD);
}

#[test]
fn pending_reset_is_serviced_at_zero_budget() {
    let mut memory = memory_with_reset_vector();
    memory.load(0x8000, &[0xEA, 0xEA]);
    let mut cpu = CPU::new(memory, Nmos6502);
    cpu.reset();
    while cpu.cycles() > 0 {
        cpu.step();
    }

    // Dispatch one NOP, then raise reset mid-instruction.
    cpu.step();
    assert!(cpu.cycles() > 0);
    cpu.set_reset();
    cpu.step();
    assert_eq!(cpu.cycles(), 0);

    // The in-flight instruction finishes paying before reset is serviced.
    cpu.step();
    assert_eq!(cpu.registers.program_counter, 0x8000);
    assert_eq!(cpu.cycles(), 6);
}
