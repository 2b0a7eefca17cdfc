// Interrupt sequencing: NMI/IRQ priority, the I mask, the pushed status
// byte's break bit, vectors, and the variant-specific decimal clear.

use m6502::{Bus, Memory, Nmos6502, Status, Variant, Wdc65c02, CPU};

const NMI_HANDLER: u16 = 0xA000;
const IRQ_HANDLER: u16 = 0x9000;

fn boot<V: Variant>(variant: V, program: &[u8]) -> CPU<Memory, V> {
    let mut memory = Memory::new();
    memory.load(0xFFFA, &[0x00, 0xA0]); // NMI  -> $A000
    memory.load(0xFFFC, &[0x00, 0x80]); // RESET -> $8000
    memory.load(0xFFFE, &[0x00, 0x90]); // IRQ/BRK -> $9000
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
fn irq_is_masked_while_i_is_set() {
    // I is set by reset; the pending IRQ must not preempt the NOP.
    let mut cpu = boot(Nmos6502, &[0xEA, 0xEA]);
    cpu.set_irq();
    step_instruction(&mut cpu);
    assert_eq!(cpu.registers.program_counter, 0x8001);
}

#[test]
fn irq_pushes_state_and_jumps_through_the_vector() {
    let mut cpu = boot(Nmos6502, &[0x58, 0xEA]); // CLI
    step_instruction(&mut cpu);
    cpu.set_irq();

    cpu.step();
    assert_eq!(cpu.registers.program_counter, IRQ_HANDLER);
    assert_eq!(cpu.cycles(), 7);
    assert!(cpu.registers.status.contains(Status::PS_DISABLE_INTERRUPTS));

    // Pushed: PC high, PC low, then status with B=0 and U=1.
    assert_eq!(cpu.memory.read(0x01FD), 0x80);
    assert_eq!(cpu.memory.read(0x01FC), 0x01);
    let pushed = cpu.memory.read(0x01FB);
    assert_eq!(pushed & 0b0001_0000, 0);
    assert_ne!(pushed & 0b0010_0000, 0);
    assert_eq!(cpu.registers.stack_pointer.0, 0xFA);
}

#[test]
fn nmi_is_not_masked_by_i() {
    let mut cpu = boot(Nmos6502, &[0xEA, 0xEA]);
    assert!(cpu.registers.status.contains(Status::PS_DISABLE_INTERRUPTS));
    cpu.set_nmi();
    cpu.step();
    assert_eq!(cpu.registers.program_counter, NMI_HANDLER);
    assert_eq!(cpu.cycles(), 7);
}

#[test]
fn nmi_outranks_irq() {
    let mut cpu = boot(Nmos6502, &[0x58, 0xEA]); // CLI
    step_instruction(&mut cpu);
    cpu.set_nmi();
    cpu.set_irq();
    cpu.step();
    assert_eq!(cpu.registers.program_counter, NMI_HANDLER);
}

#[test]
fn wdc65c02_clears_decimal_on_irq_entry() {
    // SED; CLI; then raise IRQ. The pushed status still carries D=1, the
    // live register does not.
    let mut cpu = boot(Wdc65c02, &[0xF8, 0x58, 0xEA]);
    step_instruction(&mut cpu);
    step_instruction(&mut cpu);
    cpu.set_irq();

    cpu.step();
    assert_eq!(cpu.registers.program_counter, IRQ_HANDLER);
    assert!(!cpu.registers.status.contains(Status::PS_DECIMAL_MODE));
    assert!(cpu.registers.status.contains(Status::PS_DISABLE_INTERRUPTS));
    let pushed = cpu.memory.read(0x01FB);
    assert_ne!(pushed & 0b0000_1000, 0);
    assert_eq!(pushed & 0b0001_0000, 0);
}

#[test]
fn nmos_keeps_decimal_across_irq_entry() {
    let mut cpu = boot(Nmos6502, &[0xF8, 0x58, 0xEA]);
    step_instruction(&mut cpu);
    step_instruction(&mut cpu);
    cpu.set_irq();

    cpu.step();
    assert_eq!(cpu.registers.program_counter, IRQ_HANDLER);
    assert!(cpu.registers.status.contains(Status::PS_DECIMAL_MODE));
}

#[test]
fn interrupt_latches_clear_once_serviced() {
    let mut cpu = boot(Nmos6502, &[0xEA, 0xEA, 0xEA, 0xEA]);
    cpu.memory.write(NMI_HANDLER, 0xEA);
    cpu.memory.write(NMI_HANDLER + 1, 0xEA);
    cpu.set_nmi();

    cpu.step();
    assert_eq!(cpu.registers.program_counter, NMI_HANDLER);
    // Drain the 7 entry cycles; no second NMI entry happens afterwards.
    while cpu.cycles() > 0 {
        cpu.step();
    }
    step_instruction(&mut cpu);
    assert_eq!(cpu.registers.program_counter, NMI_HANDLER + 1);
}

#[test]
fn brk_skips_its_padding_byte_and_pushes_b_set() {
    // BRK $FF; the handler returns with RTI.
    let mut cpu = boot(Nmos6502, &[0x00, 0xFF, 0xEA]);
    cpu.memory.write(IRQ_HANDLER, 0x40); // RTI

    assert_eq!(step_instruction(&mut cpu), 7);
    assert_eq!(cpu.registers.program_counter, IRQ_HANDLER);
    assert!(cpu.registers.status.contains(Status::PS_DISABLE_INTERRUPTS));
    // Return address is the byte after the padding byte.
    assert_eq!(cpu.memory.read(0x01FD), 0x80);
    assert_eq!(cpu.memory.read(0x01FC), 0x02);
    let pushed = cpu.memory.read(0x01FB);
    assert_ne!(pushed & 0b0001_0000, 0);
    assert_ne!(pushed & 0b0010_0000, 0);

    assert_eq!(step_instruction(&mut cpu), 6);
    assert_eq!(cpu.registers.program_counter, 0x8002);
    assert_eq!(cpu.registers.stack_pointer.0, 0xFD);
}

#[test]
fn wdc65c02_brk_clears_decimal() {
    let mut cpu = boot(Wdc65c02, &[0xF8, 0x00, 0xFF]);
    step_instruction(&mut cpu);
    step_instruction(&mut cpu);
    assert_eq!(cpu.registers.program_counter, IRQ_HANDLER);
    assert!(!cpu.registers.status.contains(Status::PS_DECIMAL_MODE));
}

#[test]
fn rti_restores_status_with_unused_forced_and_break_clear() {
    let mut cpu = boot(Nmos6502, &[0x58, 0xEA, 0xEA]); // CLI
    step_instruction(&mut cpu);
    cpu.set_irq();
    cpu.step();
    assert_eq!(cpu.registers.program_counter, IRQ_HANDLER);
    while cpu.cycles() > 0 {
        cpu.step();
    }

    cpu.memory.write(IRQ_HANDLER, 0x40); // RTI
    step_instruction(&mut cpu);
    assert_eq!(cpu.registers.program_counter, 0x8001);
    // I was clear when the IRQ pushed status, so RTI unmasks again.
    assert!(!cpu.registers.status.contains(Status::PS_DISABLE_INTERRUPTS));
    assert!(cpu.registers.status.contains(Status::PS_UNUSED));
    assert!(!cpu.registers.status.contains(Status::PS_BRK));
}
