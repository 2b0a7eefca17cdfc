// Copyright (C) 2014 The 6502-rs Developers
// All rights reserved.
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions
// are met:
// 1. Redistributions of source code must retain the above copyright
//    notice, this list of conditions and the following disclaimer.
// 2. Redistributions in binary form must reproduce the above copyright
//    notice, this list of conditions and the following disclaimer in the
//    documentation and/or other materials provided with the distribution.
// 3. Neither the names of the copyright holders nor the names of any
//    contributors may be used to endorse or promote products derived from this
//    software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.

//! CPU state and the per-cycle execution driver.
//!
//! The driver models a clock tick, not a whole instruction. Each call to
//! [`CPU::step`] retires one emulated cycle; when the remaining budget for
//! the in-flight instruction reaches zero, the next thing happens — in
//! priority order a pending reset, a pending NMI, a pending unmasked IRQ, or
//! the fetch/decode/execute of one instruction, whose base cycle count then
//! refills the budget. Page-cross and branch-taken bonuses are charged by the
//! operation handlers themselves, because whether a bonus applies depends on
//! the operation (stores never pay the cross penalty, reads do).
//!
//! All bus traffic within one instruction is issued in architectural order:
//! opcode fetch, operand fetches, pointer reads low then high, then the
//! operation's own reads and writes. Read-modify-write instructions issue a
//! read and a write at the same address, never a coalesced access.

use core::marker::PhantomData;

use crate::instruction::{AddressingMode, Instruction};
use crate::memory::{Bus, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
use crate::registers::{Registers, StackPointer, Status};
use crate::Variant;

/// A 6502-family processor, generic over its memory bus and its variant.
///
/// The variant is a zero-sized tag chosen at construction:
///
/// ```
/// use m6502::{Memory, Nmos6502, Wdc65c02, CPU};
///
/// let nmos = CPU::new(Memory::new(), Nmos6502);
/// let cmos = CPU::new(Memory::new(), Wdc65c02);
/// # let _ = (nmos, cmos);
/// ```
///
/// State changes only inside [`CPU::step`] and [`CPU::reset`]; the bus may be
/// mutated from outside between steps, and the interrupt lines may be raised
/// at any point with [`CPU::set_nmi`], [`CPU::set_irq`] and
/// [`CPU::set_reset`].
#[derive(Clone)]
pub struct CPU<M, V>
where
    M: Bus,
    V: Variant,
{
    /// CPU registers: program counter, stack pointer, accumulator, index
    /// registers and status flags
    pub registers: Registers,
    /// Memory bus the CPU reads from and writes to
    pub memory: M,
    /// Cycles still owed for the in-flight instruction or interrupt sequence
    cycles: u32,
    /// Set by STP on the WDC65C02, or by an undefined opcode on the NMOS
    /// variant. Only a reset clears it.
    halted: bool,
    /// Set by WAI on the WDC65C02 until an interrupt line wakes the core
    waiting: bool,
    reset_pending: bool,
    nmi_pending: bool,
    irq_pending: bool,
    variant: PhantomData<V>,
}

impl<M: Bus, V: Variant> CPU<M, V> {
    // Allowing `needless_pass_by_value` to simplify construction. The
    // variant is a zero-sized tag; passing it by value reads naturally at
    // the call site.
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(memory: M, _variant: V) -> CPU<M, V> {
        CPU {
            registers: Registers::new(),
            memory,
            cycles: 0,
            halted: false,
            waiting: false,
            reset_pending: false,
            nmi_pending: false,
            irq_pending: false,
            variant: PhantomData,
        }
    }

    /// Runs the reset sequence immediately.
    ///
    /// Clears A, X and Y, sets SP to `0xFD`, sets the interrupt-disable and
    /// unused flags, loads PC from the reset vector at `0xFFFC`, and charges
    /// the variant's reset cycle count (6 on NMOS, 7 on WDC65C02). The NMOS
    /// part carries the decimal flag across reset; the WDC65C02 clears it.
    /// Nothing is pushed on the stack. A halted or waiting core resumes.
    pub fn reset(&mut self) {
        let keep_decimal = !V::CLEARS_DECIMAL_ON_INTERRUPT
            && self.registers.status.contains(Status::PS_DECIMAL_MODE);

        self.registers.accumulator = 0;
        self.registers.index_x = 0;
        self.registers.index_y = 0;
        self.registers.stack_pointer = StackPointer(0xFD);
        self.registers.status = Status::PS_DISABLE_INTERRUPTS | Status::PS_UNUSED;
        if keep_decimal {
            self.registers.status.insert(Status::PS_DECIMAL_MODE);
        }

        self.registers.program_counter = self.read_vector(RESET_VECTOR);
        self.cycles = V::RESET_CYCLES;
        self.halted = false;
        self.waiting = false;

        log::debug!("reset: pc={:04x}", self.registers.program_counter);
    }

    /// Requests a reset; serviced at the next zero-budget transition, ahead
    /// of NMI and IRQ.
    pub fn set_reset(&mut self) {
        self.reset_pending = true;
    }

    /// Requests a non-maskable interrupt.
    pub fn set_nmi(&mut self) {
        self.nmi_pending = true;
    }

    /// Requests a maskable interrupt; ignored while the interrupt-disable
    /// flag is set.
    pub fn set_irq(&mut self) {
        self.irq_pending = true;
    }

    /// Cycles still owed for the instruction or interrupt sequence in flight.
    #[must_use]
    pub const fn cycles(&self) -> u32 {
        self.cycles
    }

    /// True after STP, or after an undefined opcode on the NMOS variant.
    #[must_use]
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// True while WAI has suspended dispatch.
    #[must_use]
    pub const fn is_waiting(&self) -> bool {
        self.waiting
    }

    /// The name of the variant this core was built for.
    #[must_use]
    pub const fn variant(&self) -> &'static str {
        V::NAME
    }

    /// Advances emulation by one cycle.
    ///
    /// A positive cycle budget just counts down. At zero budget the driver
    /// services a pending reset, NMI or unmasked IRQ (each of which refills
    /// the budget and returns), or else fetches and executes the next
    /// instruction and adds its base cycle count before the countdown
    /// continues. While halted, steps are no-ops apart from servicing a
    /// pending reset; while waiting (WAI), steps burn cycles until an
    /// interrupt line is raised.
    pub fn step(&mut self) {
        if self.halted {
            if self.reset_pending {
                self.reset_pending = false;
                self.reset();
            } else if self.cycles > 0 {
                // The halting instruction still pays off its own budget;
                // after that, steps are no-ops until reset.
                self.cycles -= 1;
            }
            return;
        }

        if self.cycles == 0 {
            if self.reset_pending {
                self.reset_pending = false;
                self.reset();
                return;
            }
            if self.nmi_pending {
                self.nmi_pending = false;
                self.waiting = false;
                log::debug!("servicing nmi");
                self.interrupt(NMI_VECTOR);
                return;
            }
            if self.irq_pending && !self.registers.status.contains(Status::PS_DISABLE_INTERRUPTS) {
                self.irq_pending = false;
                self.waiting = false;
                log::debug!("servicing irq");
                self.interrupt(IRQ_VECTOR);
                return;
            }
            if self.waiting {
                // A masked IRQ releases the wait without being serviced;
                // anything else burns the cycle in place.
                if self.irq_pending {
                    self.waiting = false;
                }
                return;
            }

            let opcode = self.memory.read(self.registers.program_counter);
            self.registers.program_counter = self.registers.program_counter.wrapping_add(1);

            let Some((instruction, mode, base_cycles)) = V::decode(opcode) else {
                // Fatal on NMOS; the WDC65C02 table decodes every byte.
                log::debug!(
                    "undefined opcode {opcode:02x} at {:04x}, halting",
                    self.registers.program_counter.wrapping_sub(1)
                );
                self.halted = true;
                return;
            };

            log::trace!("{instruction:?} {mode:?} (opcode {opcode:02x})");
            let (address, page_crossed) = self.resolve(mode);
            self.execute(instruction, mode, address, page_crossed);
            self.cycles += u32::from(base_cycles);
        }

        self.cycles -= 1;
    }

    /// Steps until the core halts. Useful for running self-contained test
    /// programs that finish with STP (or, on NMOS, by tripping an undefined
    /// opcode).
    pub fn run(&mut self) {
        while !self.halted {
            self.step();
        }
    }

    /// Interrupt entry common to NMI and IRQ: pushes PC and status (B=0),
    /// masks further IRQs, honors the variant's decimal-clear rule, loads
    /// the vector and charges 7 cycles.
    fn interrupt(&mut self, vector: u16) {
        let pc = self.registers.program_counter;
        self.push((pc >> 8) as u8);
        self.push(pc as u8);
        self.push(self.registers.status.pushed(false));
        self.registers.status.insert(Status::PS_DISABLE_INTERRUPTS);
        if V::CLEARS_DECIMAL_ON_INTERRUPT {
            self.registers.status.remove(Status::PS_DECIMAL_MODE);
        }
        self.registers.program_counter = self.read_vector(vector);
        self.cycles = 7;
    }

    /// Computes the effective address for an addressing mode, reading operand
    /// bytes at PC and advancing PC past them. The second half of the result
    /// reports whether an indexed computation crossed a page, which some
    /// handlers convert into an extra cycle.
    fn resolve(&mut self, mode: AddressingMode) -> (u16, bool) {
        match mode {
            // No operand and no address; handlers work on registers.
            AddressingMode::Accumulator | AddressingMode::Implied => (0, false),

            // The operand byte itself is the value, so its own address is
            // the effective address.
            AddressingMode::Immediate => {
                let address = self.registers.program_counter;
                self.registers.program_counter = address.wrapping_add(1);
                (address, false)
            }

            AddressingMode::ZeroPage => (u16::from(self.fetch_operand()), false),

            AddressingMode::ZeroPageX => {
                let base = self.fetch_operand();
                (u16::from(base.wrapping_add(self.registers.index_x)), false)
            }

            AddressingMode::ZeroPageY => {
                let base = self.fetch_operand();
                (u16::from(base.wrapping_add(self.registers.index_y)), false)
            }

            AddressingMode::Relative => {
                let offset = self.fetch_operand();
                let sign_extend = if offset & 0x80 == 0x80 { 0xFF } else { 0x00 };
                let base = self.registers.program_counter;
                let target = base.wrapping_add(u16::from_le_bytes([offset, sign_extend]));
                (target, (base & 0xFF00) != (target & 0xFF00))
            }

            AddressingMode::Absolute => (self.fetch_operand_word(), false),

            AddressingMode::AbsoluteX => {
                let base = self.fetch_operand_word();
                let address = base.wrapping_add(u16::from(self.registers.index_x));
                (address, (base & 0xFF00) != (address & 0xFF00))
            }

            AddressingMode::AbsoluteY => {
                let base = self.fetch_operand_word();
                let address = base.wrapping_add(u16::from(self.registers.index_y));
                (address, (base & 0xFF00) != (address & 0xFF00))
            }

            AddressingMode::Indirect => {
                let pointer = self.fetch_operand_word();
                let low = self.memory.read(pointer);
                let high = self.memory.read(pointer.wrapping_add(1));
                (u16::from_le_bytes([low, high]), false)
            }

            AddressingMode::BuggyIndirect => {
                let pointer = self.fetch_operand_word();
                let low = self.memory.read(pointer);
                // NMOS quirk: a pointer at $xxFF fetches its high byte from
                // $xx00 instead of the next page.
                let high_address = (pointer & 0xFF00) | u16::from((pointer as u8).wrapping_add(1));
                let high = self.memory.read(high_address);
                (u16::from_le_bytes([low, high]), false)
            }

            AddressingMode::IndexedIndirectX => {
                let pointer = self.fetch_operand().wrapping_add(self.registers.index_x);
                (self.read_zero_page_pointer(pointer), false)
            }

            AddressingMode::IndirectIndexedY => {
                let pointer = self.fetch_operand();
                let base = self.read_zero_page_pointer(pointer);
                let address = base.wrapping_add(u16::from(self.registers.index_y));
                (address, (base & 0xFF00) != (address & 0xFF00))
            }

            AddressingMode::ZeroPageIndirect => {
                let pointer = self.fetch_operand();
                (self.read_zero_page_pointer(pointer), false)
            }

            AddressingMode::AbsoluteIndexedIndirect => {
                let pointer = self
                    .fetch_operand_word()
                    .wrapping_add(u16::from(self.registers.index_x));
                let low = self.memory.read(pointer);
                let high = self.memory.read(pointer.wrapping_add(1));
                (u16::from_le_bytes([low, high]), false)
            }
        }
    }

    fn execute(
        &mut self,
        instruction: Instruction,
        mode: AddressingMode,
        address: u16,
        page_crossed: bool,
    ) {
        match (instruction, mode) {
            (Instruction::ADC, _) => {
                let value = self.memory.read(address);
                self.add_with_carry(value);
                if page_crossed {
                    self.cycles += 1;
                }
            }

            (Instruction::AND, _) => {
                let value = self.memory.read(address);
                let result = self.registers.accumulator & value;
                self.registers.accumulator = result;
                self.set_zn(result);
                if page_crossed {
                    self.cycles += 1;
                }
            }

            (Instruction::ASL, AddressingMode::Accumulator) => {
                let result = self.shift_left(self.registers.accumulator);
                self.registers.accumulator = result;
            }
            (Instruction::ASL, _) => {
                let value = self.memory.read(address);
                let result = self.shift_left(value);
                self.memory.write(address, result);
            }

            (Instruction::BBR(bit), _) => self.branch_on_bit(address, bit, false),
            (Instruction::BBS(bit), _) => self.branch_on_bit(address, bit, true),

            (Instruction::BCC, _) => {
                let taken = !self.registers.status.contains(Status::PS_CARRY);
                self.branch_if(taken, address, page_crossed);
            }
            (Instruction::BCS, _) => {
                let taken = self.registers.status.contains(Status::PS_CARRY);
                self.branch_if(taken, address, page_crossed);
            }
            (Instruction::BEQ, _) => {
                let taken = self.registers.status.contains(Status::PS_ZERO);
                self.branch_if(taken, address, page_crossed);
            }
            (Instruction::BNE, _) => {
                let taken = !self.registers.status.contains(Status::PS_ZERO);
                self.branch_if(taken, address, page_crossed);
            }
            (Instruction::BMI, _) => {
                let taken = self.registers.status.contains(Status::PS_NEGATIVE);
                self.branch_if(taken, address, page_crossed);
            }
            (Instruction::BPL, _) => {
                let taken = !self.registers.status.contains(Status::PS_NEGATIVE);
                self.branch_if(taken, address, page_crossed);
            }
            (Instruction::BVC, _) => {
                let taken = !self.registers.status.contains(Status::PS_OVERFLOW);
                self.branch_if(taken, address, page_crossed);
            }
            (Instruction::BVS, _) => {
                let taken = self.registers.status.contains(Status::PS_OVERFLOW);
                self.branch_if(taken, address, page_crossed);
            }
            (Instruction::BRA, _) => {
                self.take_branch(address, page_crossed);
            }

            // BIT immediate (WDC65C02) only touches Z; the other forms load
            // N and V straight from bits 7 and 6 of the operand.
            (Instruction::BIT, AddressingMode::Immediate) => {
                let value = self.memory.read(address);
                let zero = self.registers.accumulator & value == 0;
                self.registers.status.set(Status::PS_ZERO, zero);
            }
            (Instruction::BIT, _) => {
                let value = self.memory.read(address);
                let zero = self.registers.accumulator & value == 0;
                self.registers.status.set(Status::PS_ZERO, zero);
                self.registers
                    .status
                    .set(Status::PS_NEGATIVE, value & 0x80 != 0);
                self.registers
                    .status
                    .set(Status::PS_OVERFLOW, value & 0x40 != 0);
                if page_crossed {
                    self.cycles += 1;
                }
            }

            (Instruction::BRK, _) => self.break_interrupt(),

            (Instruction::CLC, _) => self.registers.status.remove(Status::PS_CARRY),
            (Instruction::CLD, _) => self.registers.status.remove(Status::PS_DECIMAL_MODE),
            (Instruction::CLI, _) => self.registers.status.remove(Status::PS_DISABLE_INTERRUPTS),
            (Instruction::CLV, _) => self.registers.status.remove(Status::PS_OVERFLOW),
            (Instruction::SEC, _) => self.registers.status.insert(Status::PS_CARRY),
            (Instruction::SED, _) => self.registers.status.insert(Status::PS_DECIMAL_MODE),
            (Instruction::SEI, _) => self.registers.status.insert(Status::PS_DISABLE_INTERRUPTS),

            (Instruction::CMP, _) => {
                let value = self.memory.read(address);
                self.compare(self.registers.accumulator, value);
                if page_crossed {
                    self.cycles += 1;
                }
            }
            (Instruction::CPX, _) => {
                let value = self.memory.read(address);
                self.compare(self.registers.index_x, value);
            }
            (Instruction::CPY, _) => {
                let value = self.memory.read(address);
                self.compare(self.registers.index_y, value);
            }

            (Instruction::DEC, AddressingMode::Accumulator) => {
                let result = self.registers.accumulator.wrapping_sub(1);
                self.registers.accumulator = result;
                self.set_zn(result);
            }
            (Instruction::DEC, _) => {
                let result = self.memory.read(address).wrapping_sub(1);
                self.memory.write(address, result);
                self.set_zn(result);
            }
            (Instruction::DEX, _) => {
                let result = self.registers.index_x.wrapping_sub(1);
                self.registers.index_x = result;
                self.set_zn(result);
            }
            (Instruction::DEY, _) => {
                let result = self.registers.index_y.wrapping_sub(1);
                self.registers.index_y = result;
                self.set_zn(result);
            }

            (Instruction::EOR, _) => {
                let value = self.memory.read(address);
                let result = self.registers.accumulator ^ value;
                self.registers.accumulator = result;
                self.set_zn(result);
                if page_crossed {
                    self.cycles += 1;
                }
            }

            (Instruction::INC, AddressingMode::Accumulator) => {
                let result = self.registers.accumulator.wrapping_add(1);
                self.registers.accumulator = result;
                self.set_zn(result);
            }
            (Instruction::INC, _) => {
                let result = self.memory.read(address).wrapping_add(1);
                self.memory.write(address, result);
                self.set_zn(result);
            }
            (Instruction::INX, _) => {
                let result = self.registers.index_x.wrapping_add(1);
                self.registers.index_x = result;
                self.set_zn(result);
            }
            (Instruction::INY, _) => {
                let result = self.registers.index_y.wrapping_add(1);
                self.registers.index_y = result;
                self.set_zn(result);
            }

            (Instruction::JMP, _) => {
                self.registers.program_counter = address;
            }
            (Instruction::JSR, _) => {
                let return_address = self.registers.program_counter.wrapping_sub(1);
                self.push((return_address >> 8) as u8);
                self.push(return_address as u8);
                self.registers.program_counter = address;
            }
            (Instruction::RTS, _) => {
                let low = self.pull();
                let high = self.pull();
                self.registers.program_counter =
                    u16::from_le_bytes([low, high]).wrapping_add(1);
            }
            (Instruction::RTI, _) => {
                let status = self.pull();
                self.registers.status = Status::pulled(status);
                let low = self.pull();
                let high = self.pull();
                self.registers.program_counter = u16::from_le_bytes([low, high]);
            }

            (Instruction::LDA, _) => {
                let value = self.memory.read(address);
                self.registers.accumulator = value;
                self.set_zn(value);
                if page_crossed {
                    self.cycles += 1;
                }
            }
            (Instruction::LDX, _) => {
                let value = self.memory.read(address);
                self.registers.index_x = value;
                self.set_zn(value);
                if page_crossed {
                    self.cycles += 1;
                }
            }
            (Instruction::LDY, _) => {
                let value = self.memory.read(address);
                self.registers.index_y = value;
                self.set_zn(value);
                if page_crossed {
                    self.cycles += 1;
                }
            }

            (Instruction::LSR, AddressingMode::Accumulator) => {
                let result = self.shift_right(self.registers.accumulator);
                self.registers.accumulator = result;
            }
            (Instruction::LSR, _) => {
                let value = self.memory.read(address);
                let result = self.shift_right(value);
                self.memory.write(address, result);
            }

            (Instruction::NOP, _) => {}

            (Instruction::ORA, _) => {
                let value = self.memory.read(address);
                let result = self.registers.accumulator | value;
                self.registers.accumulator = result;
                self.set_zn(result);
                if page_crossed {
                    self.cycles += 1;
                }
            }

            (Instruction::PHA, _) => {
                let value = self.registers.accumulator;
                self.push(value);
            }
            (Instruction::PHX, _) => {
                let value = self.registers.index_x;
                self.push(value);
            }
            (Instruction::PHY, _) => {
                let value = self.registers.index_y;
                self.push(value);
            }
            (Instruction::PHP, _) => {
                let value = self.registers.status.pushed(true);
                self.push(value);
            }
            (Instruction::PLA, _) => {
                let value = self.pull();
                self.registers.accumulator = value;
                self.set_zn(value);
            }
            (Instruction::PLX, _) => {
                let value = self.pull();
                self.registers.index_x = value;
                self.set_zn(value);
            }
            (Instruction::PLY, _) => {
                let value = self.pull();
                self.registers.index_y = value;
                self.set_zn(value);
            }
            (Instruction::PLP, _) => {
                let value = self.pull();
                self.registers.status = Status::pulled(value);
            }

            (Instruction::RMB(bit), _) => {
                let value = self.memory.read(address);
                self.memory.write(address, value & !(1 << bit));
            }
            (Instruction::SMB(bit), _) => {
                let value = self.memory.read(address);
                self.memory.write(address, value | (1 << bit));
            }

            (Instruction::ROL, AddressingMode::Accumulator) => {
                let result = self.rotate_left(self.registers.accumulator);
                self.registers.accumulator = result;
            }
            (Instruction::ROL, _) => {
                let value = self.memory.read(address);
                let result = self.rotate_left(value);
                self.memory.write(address, result);
            }
            (Instruction::ROR, AddressingMode::Accumulator) => {
                let result = self.rotate_right(self.registers.accumulator);
                self.registers.accumulator = result;
            }
            (Instruction::ROR, _) => {
                let value = self.memory.read(address);
                let result = self.rotate_right(value);
                self.memory.write(address, result);
            }

            (Instruction::SBC, _) => {
                let value = self.memory.read(address);
                self.subtract_with_carry(value);
                if page_crossed {
                    self.cycles += 1;
                }
            }

            (Instruction::STA, _) => {
                let value = self.registers.accumulator;
                self.memory.write(address, value);
            }
            (Instruction::STX, _) => {
                let value = self.registers.index_x;
                self.memory.write(address, value);
            }
            (Instruction::STY, _) => {
                let value = self.registers.index_y;
                self.memory.write(address, value);
            }
            (Instruction::STZ, _) => {
                self.memory.write(address, 0x00);
            }

            (Instruction::TAX, _) => {
                let value = self.registers.accumulator;
                self.registers.index_x = value;
                self.set_zn(value);
            }
            (Instruction::TAY, _) => {
                let value = self.registers.accumulator;
                self.registers.index_y = value;
                self.set_zn(value);
            }
            (Instruction::TXA, _) => {
                let value = self.registers.index_x;
                self.registers.accumulator = value;
                self.set_zn(value);
            }
            (Instruction::TYA, _) => {
                let value = self.registers.index_y;
                self.registers.accumulator = value;
                self.set_zn(value);
            }
            (Instruction::TSX, _) => {
                let StackPointer(value) = self.registers.stack_pointer;
                self.registers.index_x = value;
                self.set_zn(value);
            }
            // The only transfer that does not touch the flags, because the
            // destination is the stack pointer.
            (Instruction::TXS, _) => {
                self.registers.stack_pointer = StackPointer(self.registers.index_x);
            }

            (Instruction::TSB, _) => {
                let value = self.memory.read(address);
                let zero = value & self.registers.accumulator == 0;
                self.registers.status.set(Status::PS_ZERO, zero);
                self.memory.write(address, value | self.registers.accumulator);
            }
            (Instruction::TRB, _) => {
                let value = self.memory.read(address);
                let zero = value & self.registers.accumulator == 0;
                self.registers.status.set(Status::PS_ZERO, zero);
                self.memory.write(address, value & !self.registers.accumulator);
            }

            (Instruction::WAI, _) => {
                log::debug!("wai: suspending dispatch until an interrupt is pending");
                self.waiting = true;
            }
            (Instruction::STP, _) => {
                log::debug!("stp: processor stopped until reset");
                self.halted = true;
            }
        }
    }

    // ---- interrupt and branch helpers ----

    /// BRK: the byte after the opcode is padding and is skipped on return.
    /// Pushes PC and status with B=1, masks IRQs, honors the variant's
    /// decimal-clear rule and loads the IRQ/BRK vector.
    fn break_interrupt(&mut self) {
        self.registers.program_counter = self.registers.program_counter.wrapping_add(1);
        let pc = self.registers.program_counter;
        self.push((pc >> 8) as u8);
        self.push(pc as u8);
        self.push(self.registers.status.pushed(true));
        self.registers.status.insert(Status::PS_DISABLE_INTERRUPTS);
        if V::CLEARS_DECIMAL_ON_INTERRUPT {
            self.registers.status.remove(Status::PS_DECIMAL_MODE);
        }
        self.registers.program_counter = self.read_vector(IRQ_VECTOR);
    }

    fn branch_if(&mut self, condition: bool, target: u16, page_crossed: bool) {
        if condition {
            self.take_branch(target, page_crossed);
        }
    }

    /// A taken branch costs one extra cycle, and one more when the target
    /// lies in a different page than the instruction's end.
    fn take_branch(&mut self, target: u16, page_crossed: bool) {
        self.registers.program_counter = target;
        self.cycles += 1;
        if page_crossed {
            self.cycles += 1;
        }
    }

    /// BBR/BBS use a 3-byte encoding: opcode, zero page address, relative
    /// offset. The zero page operand has already been resolved to `address`;
    /// the offset byte is fetched here, and the taken branch pays the same
    /// bonuses as the conditional branches.
    fn branch_on_bit(&mut self, address: u16, bit: u8, branch_if_set: bool) {
        let value = self.memory.read(address);
        let offset = self.fetch_operand();
        if (value & (1 << bit) != 0) == branch_if_set {
            let sign_extend = if offset & 0x80 == 0x80 { 0xFF } else { 0x00 };
            let base = self.registers.program_counter;
            let target = base.wrapping_add(u16::from_le_bytes([offset, sign_extend]));
            self.take_branch(target, (base & 0xFF00) != (target & 0xFF00));
        }
    }

    // ---- bus helpers ----

    fn fetch_operand(&mut self) -> u8 {
        let byte = self.memory.read(self.registers.program_counter);
        self.registers.program_counter = self.registers.program_counter.wrapping_add(1);
        byte
    }

    fn fetch_operand_word(&mut self) -> u16 {
        let low = self.fetch_operand();
        let high = self.fetch_operand();
        u16::from_le_bytes([low, high])
    }

    /// Reads a little-endian pointer from page zero, wrapping within the
    /// page: the high byte of a pointer at `$FF` comes from `$00`.
    fn read_zero_page_pointer(&mut self, pointer: u8) -> u16 {
        let low = self.memory.read(u16::from(pointer));
        let high = self.memory.read(u16::from(pointer.wrapping_add(1)));
        u16::from_le_bytes([low, high])
    }

    fn read_vector(&mut self, address: u16) -> u16 {
        let low = self.memory.read(address);
        let high = self.memory.read(address.wrapping_add(1));
        u16::from_le_bytes([low, high])
    }

    fn push(&mut self, data: u8) {
        self.memory
            .write(self.registers.stack_pointer.address(), data);
        self.registers.stack_pointer.decrement();
    }

    fn pull(&mut self) -> u8 {
        self.registers.stack_pointer.increment();
        self.memory.read(self.registers.stack_pointer.address())
    }

    // ---- flag and ALU helpers ----

    fn set_zn(&mut self, value: u8) {
        self.registers.status.set(Status::PS_ZERO, value == 0);
        self.registers
            .status
            .set(Status::PS_NEGATIVE, value & 0x80 != 0);
    }

    /// A + M + C in binary. The decimal flag is ignored by arithmetic in
    /// this core (see the crate docs). Overflow is two's-complement
    /// overflow: set when both operands share a sign the result does not.
    fn add_with_carry(&mut self, value: u8) {
        let carry = u16::from(self.registers.status.contains(Status::PS_CARRY));
        let a = self.registers.accumulator;
        let result = u16::from(a) + u16::from(value) + carry;

        self.registers.status.set(Status::PS_CARRY, result > 0xFF);
        let overflow = (u16::from(a) ^ result) & (u16::from(value) ^ result) & 0x80 != 0;
        self.registers.status.set(Status::PS_OVERFLOW, overflow);

        self.registers.accumulator = result as u8;
        self.set_zn(self.registers.accumulator);
    }

    /// A - M - (1 - C) in binary; carry means "no borrow".
    fn subtract_with_carry(&mut self, value: u8) {
        let borrow = u16::from(!self.registers.status.contains(Status::PS_CARRY));
        let a = self.registers.accumulator;
        let result = u16::from(a)
            .wrapping_sub(u16::from(value))
            .wrapping_sub(borrow);

        self.registers.status.set(Status::PS_CARRY, result < 0x100);
        let overflow = (u16::from(a) ^ result) & (!u16::from(value) ^ result) & 0x80 != 0;
        self.registers.status.set(Status::PS_OVERFLOW, overflow);

        self.registers.accumulator = result as u8;
        self.set_zn(self.registers.accumulator);
    }

    /// CMP/CPX/CPY: carry for register >= operand, Z and N from the
    /// 8-bit difference. The register itself is untouched.
    fn compare(&mut self, register: u8, value: u8) {
        self.registers
            .status
            .set(Status::PS_CARRY, register >= value);
        self.set_zn(register.wrapping_sub(value));
    }

    fn shift_left(&mut self, value: u8) -> u8 {
        self.registers
            .status
            .set(Status::PS_CARRY, value & 0x80 != 0);
        let result = value << 1;
        self.set_zn(result);
        result
    }

    fn shift_right(&mut self, value: u8) -> u8 {
        self.registers
            .status
            .set(Status::PS_CARRY, value & 0x01 != 0);
        let result = value >> 1;
        self.set_zn(result);
        result
    }

    fn rotate_left(&mut self, value: u8) -> u8 {
        let carry_in = u8::from(self.registers.status.contains(Status::PS_CARRY));
        self.registers
            .status
            .set(Status::PS_CARRY, value & 0x80 != 0);
        let result = (value << 1) | carry_in;
        self.set_zn(result);
        result
    }

    fn rotate_right(&mut self, value: u8) -> u8 {
        let carry_in = u8::from(self.registers.status.contains(Status::PS_CARRY));
        self.registers
            .status
            .set(Status::PS_CARRY, value & 0x01 != 0);
        let result = (value >> 1) | (carry_in << 7);
        self.set_zn(result);
        result
    }
}

impl<M: Bus, V: Variant> core::fmt::Debug for CPU<M, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("CPU")
            .field("registers", &self.registers)
            .field("cycles", &self.cycles)
            .field("halted", &self.halted)
            .field("waiting", &self.waiting)
            .finish_non_exhaustive()
    }
}
