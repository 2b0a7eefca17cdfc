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

//! The register file: accumulator, index registers, stack pointer, program
//! counter and the processor status bitfield.

use bitflags::bitflags;

use crate::memory::STACK_PAGE;

bitflags! {
    /// The processor status register, `NV-BDIZC`.
    ///
    /// Bit 5 ([`Status::PS_UNUSED`]) behaves as if hard-wired to 1 in the
    /// live register. Bit 4 ([`Status::PS_BRK`]) only ever appears in copies
    /// pushed on the stack; it distinguishes a BRK/PHP push (B=1) from an
    /// NMI/IRQ push (B=0) and is cleared again whenever status is pulled.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Status: u8 {
        const PS_NEGATIVE           = 0b1000_0000;
        const PS_OVERFLOW           = 0b0100_0000;
        const PS_UNUSED             = 0b0010_0000;
        const PS_BRK                = 0b0001_0000;
        const PS_DECIMAL_MODE       = 0b0000_1000;
        const PS_DISABLE_INTERRUPTS = 0b0000_0100;
        const PS_ZERO               = 0b0000_0010;
        const PS_CARRY              = 0b0000_0001;
    }
}

impl Status {
    /// Normalizes a byte pulled from the stack (PLP, RTI) into a live status
    /// value: the unused bit is forced on, the break bit forced off.
    #[must_use]
    pub fn pulled(bits: u8) -> Status {
        (Status::from_bits_truncate(bits) | Status::PS_UNUSED) & !Status::PS_BRK
    }

    /// Projects the live status into the byte pushed on the stack. BRK and
    /// PHP push with B=1; NMI and IRQ push with B=0. The unused bit is always
    /// pushed as 1.
    #[must_use]
    pub fn pushed(self, brk: bool) -> u8 {
        let stacked = if brk {
            self | Status::PS_UNUSED | Status::PS_BRK
        } else {
            (self | Status::PS_UNUSED) & !Status::PS_BRK
        };
        stacked.bits()
    }
}

impl Default for Status {
    fn default() -> Status {
        Status::PS_DISABLE_INTERRUPTS | Status::PS_UNUSED
    }
}

/// The stack pointer: an 8-bit offset into the fixed stack page.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct StackPointer(pub u8);

impl StackPointer {
    /// The full 16-bit address the pointer currently designates.
    #[must_use]
    pub const fn address(self) -> u16 {
        STACK_PAGE | self.0 as u16
    }

    /// Moves the pointer down one slot, wrapping within the stack page.
    pub fn decrement(&mut self) {
        self.0 = self.0.wrapping_sub(1);
    }

    /// Moves the pointer up one slot, wrapping within the stack page.
    pub fn increment(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// The complete register file of a 6502-family processor.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Registers {
    pub accumulator: u8,
    pub index_x: u8,
    pub index_y: u8,
    pub stack_pointer: StackPointer,
    pub program_counter: u16,
    pub status: Status,
}

impl Registers {
    #[must_use]
    pub fn new() -> Registers {
        Registers {
            accumulator: 0,
            index_x: 0,
            index_y: 0,
            stack_pointer: StackPointer(0xFD),
            program_counter: 0,
            status: Status::default(),
        }
    }
}

impl Default for Registers {
    fn default() -> Registers {
        Registers::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulled_status_forces_unused_and_clears_break() {
        let status = Status::pulled(0xFF);
        assert!(status.contains(Status::PS_UNUSED));
        assert!(!status.contains(Status::PS_BRK));
        assert!(status.contains(Status::PS_NEGATIVE));
        assert!(status.contains(Status::PS_CARRY));

        let status = Status::pulled(0x00);
        assert_eq!(status, Status::PS_UNUSED);
    }

    #[test]
    fn pushed_status_sets_break_only_for_brk_and_php() {
        let status = Status::PS_CARRY | Status::PS_UNUSED;
        assert_eq!(status.pushed(true), 0b0011_0001);
        assert_eq!(status.pushed(false), 0b0010_0001);
    }

    #[test]
    fn stack_pointer_wraps_within_the_stack_page() {
        let mut sp = StackPointer(0x00);
        assert_eq!(sp.address(), 0x0100);
        sp.decrement();
        assert_eq!(sp.0, 0xFF);
        assert_eq!(sp.address(), 0x01FF);
        sp.increment();
        assert_eq!(sp.0, 0x00);
    }

    #[test]
    fn power_on_defaults() {
        let registers = Registers::new();
        assert_eq!(registers.stack_pointer.0, 0xFD);
        assert!(registers.status.contains(Status::PS_DISABLE_INTERRUPTS));
        assert!(registers.status.contains(Status::PS_UNUSED));
        assert_eq!(registers.accumulator, 0);
    }
}
