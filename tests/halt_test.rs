// Halt semantics: fatal undefined opcodes on NMOS, STP on the WDC65C02,
// and the frozen-registers invariant until an external reset.

use m6502::{Bus, Memory, Nmos6502, Variant, Wdc65c02, CPU};

fn boot<V: Variant>(variant: V, program: &[u8]) -> CPU<Memory, V> {
    let mut memory = Memory::new();
    memory.load(0xFFFC, &[0x00, 0x80]);
    memory.load(0x8000, program);
    let mut cpu = CPU::new(memory, variant);
    cpu.reset();
    while cpu.cycles() > 0 {
        cpu.step();
    }
    cpu
}

#[test]
fn nmos_halts_on_an_undefined_opcode() {
    let mut cpu = boot(Nmos6502, &[0xA9, 0x42, 0x02]);
    cpu.step();
    cpu.step(); // LDA #$42
    cpu.step(); // opcode $02 is undefined
    assert!(cpu.is_halted());
    assert_eq!(cpu.registers.program_counter, 0x8003);
    assert_eq!(cpu.registers.accumulator, 0x42);
}

#[test]
fn halted_core_freezes_all_registers() {
    let mut cpu = boot(Nmos6502, &[0x02]);
    cpu.step();
    assert!(cpu.is_halted());

    let registers = cpu.registers;
    for _ in 0..20 {
        cpu.step();
    }
    assert!(cpu.is_halted());
    assert_eq!(cpu.registers, registers);
    assert_eq!(cpu.cycles(), 0);
}

#[test]
fn stp_halts_the_wdc65c02_until_reset() {
    let mut cpu = boot(Wdc65c02, &[0xDB, 0xEA]);
    // STP charges its 3 base cycles like any instruction.
    cpu.step();
    assert!(cpu.is_halted());
    while cpu.cycles() > 0 {
        cpu.step();
    }

    let registers = cpu.registers;
    for _ in 0..10 {
        cpu.step();
    }
    assert_eq!(cpu.registers, registers);

    // Only reset leaves the halted state.
    cpu.set_reset();
    cpu.step();
    assert!(!cpu.is_halted());
    assert_eq!(cpu.registers.program_counter, 0x8000);
    assert_eq!(cpu.cycles(), 7);
}

#[test]
fn direct_reset_call_also_recovers() {
    let mut cpu = boot(Wdc65c02, &[0xDB]);
    cpu.step();
    assert!(cpu.is_halted());
    cpu.reset();
    assert!(!cpu.is_halted());
    assert_eq!(cpu.registers.program_counter, 0x8000);
}

#[test]
fn run_stops_at_the_halt() {
    // A short program that ends in STP: LDA #$11; STP
    let mut cpu = boot(Wdc65c02, &[0xA9, 0x11, 0xDB]);
    cpu.run();
    assert!(cpu.is_halted());
    assert_eq!(cpu.registers.accumulator, 0x11);
}
