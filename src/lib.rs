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

//! A cycle-accurate emulator core for the 6502 family of 8-bit
//! microprocessors.
//!
//! MOS Technology's 6502 sold for $25 in 1975 when its competitors cost
//! close to $200, and that price point put it at the heart of the Apple II,
//! the Commodore 64, the Atari 2600 and the BBC Micro. Eight years later the
//! Western Design Center reworked it in CMOS as the 65C02: the same
//! programming model with the worst silicon bugs fixed and a couple dozen
//! new instructions. Both chips are still manufactured today, and both are
//! emulated here:
//!
//! - [`Nmos6502`] — the original NMOS part, including its JMP-indirect page
//!   boundary bug and the fatal treatment of its 105 undocumented opcodes.
//! - [`Wdc65c02`] — WDC's CMOS part: bug fixed, decimal flag cleared on
//!   interrupt entry, 27 extra instructions, two extra addressing modes,
//!   and every unassigned opcode behaving as a documented NOP.
//!
//! The core is a library: it owns no memory. All reads and writes go through
//! a caller-supplied [`Bus`], so memory-mapped IO, banking and tracing live
//! on the caller's side of the fence. Execution is driven one emulated cycle
//! at a time with [`CPU::step`]; an instruction is dispatched whenever the
//! remaining cycle budget reaches zero, which keeps long-running instructions
//! and interrupt sequences accountable to an external clock.
//!
//! Decimal mode is carried as a flag (SED/CLD/PLP behave normally) but ADC
//! and SBC always compute in binary; BCD arithmetic is out of scope for this
//! core.
//!
//! # Quick start
//!
//! ```
//! use m6502::{Bus, Memory, Nmos6502, CPU};
//!
//! let mut memory = Memory::new();
//! // Reset vector -> 0x8000, program: LDA #$42
//! memory.load(0xFFFC, &[0x00, 0x80]);
//! memory.load(0x8000, &[0xA9, 0x42]);
//!
//! let mut cpu = CPU::new(memory, Nmos6502);
//! cpu.reset();
//! assert_eq!(cpu.registers.program_counter, 0x8000);
//!
//! // 6 cycles of reset, then the 2-cycle LDA.
//! for _ in 0..8 {
//!     cpu.step();
//! }
//! assert_eq!(cpu.registers.accumulator, 0x42);
//! assert_eq!(cpu.cycles(), 0);
//! ```

#![warn(clippy::all, clippy::pedantic)]
#![warn(
    absolute_paths_not_starting_with_crate,
    rustdoc::invalid_html_tags,
    missing_copy_implementations,
    semicolon_in_expressions_from_macros,
    unreachable_pub,
    unused_extern_crates
)]
#![deny(anonymous_parameters, macro_use_extern_crate)]
#![allow(clippy::module_name_repetitions, clippy::needless_doctest_main)]
// Registers and operations follow the 6502 naming convention and have
// similar names at times
#![allow(clippy::similar_names)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::too_many_lines)]
#![no_std]

pub mod cpu;
pub mod instruction;
pub mod memory;
pub mod registers;

pub use cpu::CPU;
pub use instruction::{AddressingMode, Instruction, Nmos6502, OpcodeEntry, Wdc65c02};
pub use memory::{Bus, Memory, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR, STACK_PAGE};
pub use registers::{Registers, StackPointer, Status};

/// A concrete member of the 6502 family.
///
/// A variant is chosen at construction time as a type parameter of
/// [`CPU`] and is immutable afterwards. It fixes the dispatch table, the
/// length of the reset sequence, and whether interrupt entry clears the
/// decimal flag. The NMOS JMP-indirect quirk needs no hook of its own: the
/// tables encode it by mapping opcode `0x6C` to different addressing modes.
pub trait Variant {
    /// Human-readable name for traces and debuggers.
    const NAME: &'static str;

    /// Cycles consumed by the reset sequence: 6 on the NMOS 6502, 7 on the
    /// WDC65C02.
    const RESET_CYCLES: u32;

    /// Whether servicing an interrupt (and resetting) clears the decimal
    /// flag. The NMOS part leaves D untouched; the WDC65C02 clears it.
    const CLEARS_DECIMAL_ON_INTERRUPT: bool;

    /// The dispatch table: maps an opcode byte to its operation, addressing
    /// mode and base cycle count. `None` means the opcode is undefined for
    /// this variant, which the step driver treats as fatal.
    fn decode(opcode: u8) -> Option<OpcodeEntry>;
}
