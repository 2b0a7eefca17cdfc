// Stack operations and status round-trips: pushes land at $0100|SP, pulls
// normalize the unused and break bits, and the pointer wraps within the
// stack page.

use m6502::{Bus, Memory, Nmos6502, Status, Variant, CPU};

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

fn step_instruction<V: Variant>(cpu: &mut CPU<Memory, V>) -> u32 {
    let mut steps = 0;
    loop {
        cpu.step();
        steps += 1;
        assert!(steps < 100, "instruction never finished");
        if cpu.cycles() == 0 {
            return steps;
        }
    }
}

#[test]
fn pha_pla_round_trip_restores_a_and_flags() {
    // LDA #$C7; PHA; LDA #$00; PLA
    let mut cpu = boot(Nmos6502, &[0xA9, 0xC7, 0x48, 0xA9, 0x00, 0x68]);
    for _ in 0..4 {
        step_instruction(&mut cpu);
    }
    assert_eq!(cpu.registers.accumulator, 0xC7);
    assert_eq!(cpu.registers.stack_pointer.0, 0xFD);
    assert!(cpu.registers.status.contains(Status::PS_NEGATIVE));
    assert!(!cpu.registers.status.contains(Status::PS_ZERO));
    // The pushed copy went to $0100 | SP.
    assert_eq!(cpu.memory.read(0x01FD), 0xC7);
}

#[test]
fn php_pushes_break_and_unused_set() {
    let mut cpu = boot(Nmos6502, &[0x08]);
    step_instruction(&mut cpu);
    // After reset the live status is I|U; the stacked copy adds B.
    assert_eq!(cpu.memory.read(0x01FD), 0b0011_0100);
    assert_eq!(cpu.registers.stack_pointer.0, 0xFC);
}

#[test]
fn plp_forces_unused_and_clears_break_in_the_live_register() {
    // LDA #$FF; PHA; PLP
    let mut cpu = boot(Nmos6502, &[0xA9, 0xFF, 0x48, 0x28]);
    for _ in 0..3 {
        step_instruction(&mut cpu);
    }
    assert_eq!(cpu.registers.status.bits(), 0b1110_1111);
    assert!(cpu.registers.status.contains(Status::PS_UNUSED));
    assert!(!cpu.registers.status.contains(Status::PS_BRK));
}

#[test]
fn php_plp_round_trip_is_identity_on_the_live_register() {
    // SEC; SED; PHP; CLC; CLD; PLP
    let mut cpu = boot(Nmos6502, &[0x38, 0xF8, 0x08, 0x18, 0xD8, 0x28]);
    for _ in 0..3 {
        step_instruction(&mut cpu);
    }
    let pushed_at = cpu.registers.status;
    for _ in 0..3 {
        step_instruction(&mut cpu);
    }
    assert_eq!(cpu.registers.status, pushed_at);
    assert!(cpu.registers.status.contains(Status::PS_CARRY));
    assert!(cpu.registers.status.contains(Status::PS_DECIMAL_MODE));
}

#[test]
fn push_wraps_from_the_bottom_of_the_stack_page() {
    // LDX #$00; TXS; PHA -> the byte lands at $0100 and SP wraps to $FF.
    let mut cpu = boot(Nmos6502, &[0xA9, 0x5C, 0xA2, 0x00, 0x9A, 0x48]);
    for _ in 0..4 {
        step_instruction(&mut cpu);
    }
    assert_eq!(cpu.memory.read(0x0100), 0x5C);
    assert_eq!(cpu.registers.stack_pointer.0, 0xFF);
}

#[test]
fn jsr_pushes_return_minus_one_and_rts_comes_back_after_it() {
    // JSR $8010; the subroutine is a single RTS.
    let mut cpu = boot(Nmos6502, &[0x20, 0x10, 0x80]);
    cpu.memory.write(0x8010, 0x60);

    step_instruction(&mut cpu);
    assert_eq!(cpu.registers.program_counter, 0x8010);
    assert_eq!(cpu.registers.stack_pointer.0, 0xFB);
    assert_eq!(cpu.memory.read(0x01FD), 0x80); // return-1 high
    assert_eq!(cpu.memory.read(0x01FC), 0x02); // return-1 low

    step_instruction(&mut cpu);
    assert_eq!(cpu.registers.program_counter, 0x8003);
    assert_eq!(cpu.registers.stack_pointer.0, 0xFD);
}

#[test]
fn txs_does_not_touch_flags_and_tsx_does() {
    // LDX #$00; TXS -> Z would be set by a flag-setting transfer, TXS leaves
    // it alone. TSX afterwards copies SP back and sets Z/N from the value.
    let mut cpu = boot(Nmos6502, &[0xA2, 0x80, 0x9A, 0xA2, 0x01, 0xBA]);
    step_instruction(&mut cpu); // LDX #$80 sets N
    step_instruction(&mut cpu); // TXS
    assert!(cpu.registers.status.contains(Status::PS_NEGATIVE));
    assert_eq!(cpu.registers.stack_pointer.0, 0x80);

    step_instruction(&mut cpu); // LDX #$01 clears N
    step_instruction(&mut cpu); // TSX
    assert_eq!(cpu.registers.index_x, 0x80);
    assert!(cpu.registers.status.contains(Status::PS_NEGATIVE));
}
