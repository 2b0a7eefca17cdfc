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

//! The memory/IO interface the CPU drives, plus a flat 64 KiB RAM
//! implementation for tests and simple machines.
//!
//! The 6502 has a 16-bit address bus, so every address in `0x0000..=0xFFFF`
//! is valid. Reads and writes may be observable (memory-mapped IO), which is
//! why both [`Bus::read`] and [`Bus::write`] take `&mut self` and why the CPU
//! never elides or reorders them.

/// First address of the stack page. The stack pointer indexes into
/// `0x0100..=0x01FF` and grows downward.
pub const STACK_PAGE: u16 = 0x0100;

/// NMI vector (little-endian pointer at `0xFFFA`/`0xFFFB`).
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Reset vector (little-endian pointer at `0xFFFC`/`0xFFFD`).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ/BRK vector (little-endian pointer at `0xFFFE`/`0xFFFF`).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Memory and IO as seen from the CPU.
///
/// Implementations can be plain RAM, banked memory, or memory-mapped devices.
/// Both operations must be total: every 16-bit address is a valid argument.
pub trait Bus {
    /// Returns the byte at `address`. May have device side effects.
    fn read(&mut self, address: u16) -> u8;

    /// Stores `data` at `address`. May have device side effects.
    fn write(&mut self, address: u16, data: u8);

    /// Copies `data` into the address space starting at `start`, using
    /// [`Bus::write`] for each byte. Convenient for loading test programs.
    fn load(&mut self, start: u16, data: &[u8]) {
        for (offset, byte) in data.iter().enumerate() {
            self.write(start.wrapping_add(offset as u16), *byte);
        }
    }
}

const MEMORY_SIZE: usize = 0x1_0000;

/// A flat 64 KiB RAM with no mapped devices.
#[derive(Clone)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    #[must_use]
    pub const fn new() -> Memory {
        Memory {
            bytes: [0; MEMORY_SIZE],
        }
    }
}

impl Default for Memory {
    fn default() -> Memory {
        Memory::new()
    }
}

impl Bus for Memory {
    fn read(&mut self, address: u16) -> u8 {
        self.bytes[address as usize]
    }

    fn write(&mut self, address: u16, data: u8) {
        self.bytes[address as usize] = data;
    }

    fn load(&mut self, start: u16, data: &[u8]) {
        let start = start as usize;
        self.bytes[start..start + data.len()].copy_from_slice(data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_back_what_was_written() {
        let mut memory = Memory::new();
        assert_eq!(memory.read(0x1234), 0x00);
        memory.write(0x1234, 0x56);
        assert_eq!(memory.read(0x1234), 0x56);
    }

    #[test]
    fn load_copies_a_slice() {
        let mut memory = Memory::new();
        memory.load(0x8000, &[0xA9, 0x42, 0xEA]);
        assert_eq!(memory.read(0x8000), 0xA9);
        assert_eq!(memory.read(0x8001), 0x42);
        assert_eq!(memory.read(0x8002), 0xEA);
    }
}
