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

//! The instruction set, the addressing modes, and the per-variant dispatch
//! tables.
//!
//! Each variant's [`decode`](crate::Variant::decode) is a dense 256-entry
//! table keyed by opcode byte. An entry carries the operation, its addressing
//! mode, and the base cycle count; page-cross and branch-taken bonuses are
//! charged by the operation handlers. The table is the authority on what
//! each opcode encodes: the NMOS table populates the 151 documented opcodes
//! and leaves the rest undefined (a fatal halt when executed), while the
//! WDC65C02 table defines every byte, mapping unassigned opcodes to NOPs of
//! the documented length and cycle count.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    // ADd with Carry
    ADC,

    // logical AND (bitwise)
    AND,

    // Arithmetic Shift Left
    ASL,

    // Branch on Bit Reset (bit 0-7 of a zero page byte); WDC65C02
    BBR(u8),

    // Branch on Bit Set (bit 0-7 of a zero page byte); WDC65C02
    BBS(u8),

    // Branch if Carry Clear
    BCC,

    // Branch if Carry Set
    BCS,

    // Branch if EQual (zero flag set)
    BEQ,

    // BIT test
    BIT,

    // Branch if MInus
    BMI,

    // Branch if Not Equal
    BNE,

    // Branch if PLus
    BPL,

    // unconditional BRAnch; WDC65C02
    BRA,

    // BReaK
    BRK,

    // Branch if oVerflow Clear
    BVC,

    // Branch if oVerflow Set
    BVS,

    // CLear Carry flag
    CLC,

    // CLear Decimal mode
    CLD,

    // CLear Interrupt disable
    CLI,

    // CLear oVerflow flag
    CLV,

    // CoMPare with accumulator
    CMP,

    // ComPare with X register
    CPX,

    // ComPare with Y register
    CPY,

    // DECrement memory (or the accumulator on WDC65C02)
    DEC,

    // DEcrement X register
    DEX,

    // DEcrement Y register
    DEY,

    // Exclusive OR (bitwise)
    EOR,

    // INCrement memory (or the accumulator on WDC65C02)
    INC,

    // INcrement X register
    INX,

    // INcrement Y register
    INY,

    // JuMP
    JMP,

    // Jump to SubRoutine
    JSR,

    // LoaD Accumulator
    LDA,

    // LoaD X register
    LDX,

    // LoaD Y register
    LDY,

    // Logical Shift Right
    LSR,

    // No OPeration
    NOP,

    // inclusive OR (bitwise)
    ORA,

    // PusH Accumulator
    PHA,

    // PusH Processor status
    PHP,

    // PusH X; WDC65C02
    PHX,

    // PusH Y; WDC65C02
    PHY,

    // PuLl Accumulator
    PLA,

    // PuLl Processor status
    PLP,

    // PuLl X; WDC65C02
    PLX,

    // PuLl Y; WDC65C02
    PLY,

    // Reset Memory Bit 0-7 in a zero page byte; WDC65C02
    RMB(u8),

    // ROtate Left through carry
    ROL,

    // ROtate Right through carry
    ROR,

    // ReTurn from Interrupt
    RTI,

    // ReTurn from Subroutine
    RTS,

    // SuBtract with Carry
    SBC,

    // SEt Carry flag
    SEC,

    // SEt Decimal mode
    SED,

    // SEt Interrupt disable
    SEI,

    // Set Memory Bit 0-7 in a zero page byte; WDC65C02
    SMB(u8),

    // STore Accumulator
    STA,

    // SToP the processor until reset; WDC65C02
    STP,

    // STore X register
    STX,

    // STore Y register
    STY,

    // STore Zero; WDC65C02
    STZ,

    // Transfer Accumulator to X
    TAX,

    // Transfer Accumulator to Y
    TAY,

    // Test and Reset Bits; WDC65C02
    TRB,

    // Test and Set Bits; WDC65C02
    TSB,

    // Transfer Stack pointer to X
    TSX,

    // Transfer X to Accumulator
    TXA,

    // Transfer X to Stack pointer
    TXS,

    // Transfer Y to Accumulator
    TYA,

    // WAit for Interrupt; WDC65C02
    WAI,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AddressingMode {
    // work directly on the accumulator, e. g. `lsr a`.
    Accumulator,

    // no operand, e. g. `brk`.
    Implied,

    // 8-bit constant in the instruction, e. g. `lda #10`.
    Immediate,

    // zero page address, e. g. `lda $00`.
    ZeroPage,

    // zero page address plus X register, wrapping within page zero,
    // e. g. `lda $80,x`.
    ZeroPageX,

    // zero page address plus Y register, wrapping within page zero,
    // e. g. `ldx $10,y`.
    ZeroPageY,

    // branch target as signed relative offset, e. g. `bne label`.
    Relative,

    // full 16-bit address, e. g. `jmp $1000`.
    Absolute,

    // full 16-bit address plus X register, e. g. `sta $1000,x`.
    AbsoluteX,

    // full 16-bit address plus Y register, e. g. `sta $1000,y`.
    AbsoluteY,

    // jump to the address stored at the address, with the page boundary bug
    // found in NMOS chips: a pointer at $xxFF fetches its high byte from
    // $xx00 instead of the next page.
    BuggyIndirect,

    // jump to the address stored at the address, e. g. `jmp ($1000)`.
    Indirect,

    // load from the address stored at (zero page operand plus X register),
    // e. g. `lda ($10,x)`. The pointer read wraps within page zero.
    IndexedIndirectX,

    // load from (the address stored at the zero page operand) plus Y
    // register, e. g. `lda ($10),y`.
    IndirectIndexedY,

    // load from the address stored at the zero page operand, e. g.
    // `lda ($10)`; WDC65C02.
    ZeroPageIndirect,

    // jump to the address stored at (absolute operand plus X register),
    // e. g. `jmp ($1000,x)`; WDC65C02.
    AbsoluteIndexedIndirect,
}

/// One dispatch table entry: operation, addressing mode, base cycle count.
pub type OpcodeEntry = (Instruction, AddressingMode, u8);

/// The NMOS 6502, as found in the Commodore 64, the Apple II and countless
/// other machines. Carries the JMP-indirect page boundary bug, takes 6 cycles
/// to reset, leaves the decimal flag alone on interrupt entry, and halts on
/// any of the 105 undocumented opcodes.
#[derive(Copy, Clone, Debug)]
pub struct Nmos6502;

impl crate::Variant for Nmos6502 {
    const NAME: &'static str = "NMOS6502";
    const RESET_CYCLES: u32 = 6;
    const CLEARS_DECIMAL_ON_INTERRUPT: bool = false;

    fn decode(opcode: u8) -> Option<OpcodeEntry> {
        match opcode {
            0x00 => Some((Instruction::BRK, AddressingMode::Implied, 7)),
            0x01 => Some((Instruction::ORA, AddressingMode::IndexedIndirectX, 6)),
            0x02 => None,
            0x03 => None,
            0x04 => None,
            0x05 => Some((Instruction::ORA, AddressingMode::ZeroPage, 3)),
            0x06 => Some((Instruction::ASL, AddressingMode::ZeroPage, 5)),
            0x07 => None,
            0x08 => Some((Instruction::PHP, AddressingMode::Implied, 3)),
            0x09 => Some((Instruction::ORA, AddressingMode::Immediate, 2)),
            0x0a => Some((Instruction::ASL, AddressingMode::Accumulator, 2)),
            0x0b => None,
            0x0c => None,
            0x0d => Some((Instruction::ORA, AddressingMode::Absolute, 4)),
            0x0e => Some((Instruction::ASL, AddressingMode::Absolute, 6)),
            0x0f => None,
            0x10 => Some((Instruction::BPL, AddressingMode::Relative, 2)),
            0x11 => Some((Instruction::ORA, AddressingMode::IndirectIndexedY, 5)),
            0x12 => None,
            0x13 => None,
            0x14 => None,
            0x15 => Some((Instruction::ORA, AddressingMode::ZeroPageX, 4)),
            0x16 => Some((Instruction::ASL, AddressingMode::ZeroPageX, 6)),
            0x17 => None,
            0x18 => Some((Instruction::CLC, AddressingMode::Implied, 2)),
            0x19 => Some((Instruction::ORA, AddressingMode::AbsoluteY, 4)),
            0x1a => None,
            0x1b => None,
            0x1c => None,
            0x1d => Some((Instruction::ORA, AddressingMode::AbsoluteX, 4)),
            0x1e => Some((Instruction::ASL, AddressingMode::AbsoluteX, 7)),
            0x1f => None,
            0x20 => Some((Instruction::JSR, AddressingMode::Absolute, 6)),
            0x21 => Some((Instruction::AND, AddressingMode::IndexedIndirectX, 6)),
            0x22 => None,
            0x23 => None,
            0x24 => Some((Instruction::BIT, AddressingMode::ZeroPage, 3)),
            0x25 => Some((Instruction::AND, AddressingMode::ZeroPage, 3)),
            0x26 => Some((Instruction::ROL, AddressingMode::ZeroPage, 5)),
            0x27 => None,
            0x28 => Some((Instruction::PLP, AddressingMode::Implied, 4)),
            0x29 => Some((Instruction::AND, AddressingMode::Immediate, 2)),
            0x2a => Some((Instruction::ROL, AddressingMode::Accumulator, 2)),
            0x2b => None,
            0x2c => Some((Instruction::BIT, AddressingMode::Absolute, 4)),
            0x2d => Some((Instruction::AND, AddressingMode::Absolute, 4)),
            0x2e => Some((Instruction::ROL, AddressingMode::Absolute, 7)),
            0x2f => None,
            0x30 => Some((Instruction::BMI, AddressingMode::Relative, 2)),
            0x31 => Some((Instruction::AND, AddressingMode::IndirectIndexedY, 5)),
            0x32 => None,
            0x33 => None,
            0x34 => None,
            0x35 => Some((Instruction::AND, AddressingMode::ZeroPageX, 4)),
            0x36 => Some((Instruction::ROL, AddressingMode::ZeroPageX, 6)),
            0x37 => None,
            0x38 => Some((Instruction::SEC, AddressingMode::Implied, 2)),
            0x39 => Some((Instruction::AND, AddressingMode::AbsoluteY, 4)),
            0x3a => None,
            0x3b => None,
            0x3c => None,
            0x3d => Some((Instruction::AND, AddressingMode::AbsoluteX, 4)),
            0x3e => Some((Instruction::ROL, AddressingMode::AbsoluteX, 7)),
            0x3f => None,
            0x40 => Some((Instruction::RTI, AddressingMode::Implied, 6)),
            0x41 => Some((Instruction::EOR, AddressingMode::IndexedIndirectX, 6)),
            0x42 => None,
            0x43 => None,
            0x44 => None,
            0x45 => Some((Instruction::EOR, AddressingMode::ZeroPage, 3)),
            0x46 => Some((Instruction::LSR, AddressingMode::ZeroPage, 5)),
            0x47 => None,
            0x48 => Some((Instruction::PHA, AddressingMode::Implied, 3)),
            0x49 => Some((Instruction::EOR, AddressingMode::Immediate, 2)),
            0x4a => Some((Instruction::LSR, AddressingMode::Accumulator, 2)),
            0x4b => None,
            0x4c => Some((Instruction::JMP, AddressingMode::Absolute, 3)),
            0x4d => Some((Instruction::EOR, AddressingMode::Absolute, 4)),
            0x4e => Some((Instruction::LSR, AddressingMode::Absolute, 7)),
            0x4f => None,
            0x50 => Some((Instruction::BVC, AddressingMode::Relative, 2)),
            0x51 => Some((Instruction::EOR, AddressingMode::IndirectIndexedY, 5)),
            0x52 => None,
            0x53 => None,
            0x54 => None,
            0x55 => Some((Instruction::EOR, AddressingMode::ZeroPageX, 4)),
            0x56 => Some((Instruction::LSR, AddressingMode::ZeroPageX, 6)),
            0x57 => None,
            0x58 => Some((Instruction::CLI, AddressingMode::Implied, 2)),
            0x59 => Some((Instruction::EOR, AddressingMode::AbsoluteY, 4)),
            0x5a => None,
            0x5b => None,
            0x5c => None,
            0x5d => Some((Instruction::EOR, AddressingMode::AbsoluteX, 4)),
            0x5e => Some((Instruction::LSR, AddressingMode::AbsoluteX, 7)),
            0x5f => None,
            0x60 => Some((Instruction::RTS, AddressingMode::Implied, 6)),
            0x61 => Some((Instruction::ADC, AddressingMode::IndexedIndirectX, 6)),
            0x62 => None,
            0x63 => None,
            0x64 => None,
            0x65 => Some((Instruction::ADC, AddressingMode::ZeroPage, 3)),
            0x66 => Some((Instruction::ROR, AddressingMode::ZeroPage, 5)),
            0x67 => None,
            0x68 => Some((Instruction::PLA, AddressingMode::Implied, 4)),
            0x69 => Some((Instruction::ADC, AddressingMode::Immediate, 2)),
            0x6a => Some((Instruction::ROR, AddressingMode::Accumulator, 2)),
            0x6b => None,
            0x6c => Some((Instruction::JMP, AddressingMode::BuggyIndirect, 5)),
            0x6d => Some((Instruction::ADC, AddressingMode::Absolute, 4)),
            0x6e => Some((Instruction::ROR, AddressingMode::Absolute, 7)),
            0x6f => None,
            0x70 => Some((Instruction::BVS, AddressingMode::Relative, 2)),
            0x71 => Some((Instruction::ADC, AddressingMode::IndirectIndexedY, 5)),
            0x72 => None,
            0x73 => None,
            0x74 => None,
            0x75 => Some((Instruction::ADC, AddressingMode::ZeroPageX, 4)),
            0x76 => Some((Instruction::ROR, AddressingMode::ZeroPageX, 6)),
            0x77 => None,
            0x78 => Some((Instruction::SEI, AddressingMode::Implied, 2)),
            0x79 => Some((Instruction::ADC, AddressingMode::AbsoluteY, 4)),
            0x7a => None,
            0x7b => None,
            0x7c => None,
            0x7d => Some((Instruction::ADC, AddressingMode::AbsoluteX, 4)),
            0x7e => Some((Instruction::ROR, AddressingMode::AbsoluteX, 7)),
            0x7f => None,
            0x80 => None,
            0x81 => Some((Instruction::STA, AddressingMode::IndexedIndirectX, 6)),
            0x82 => None,
            0x83 => None,
            0x84 => Some((Instruction::STY, AddressingMode::ZeroPage, 3)),
            0x85 => Some((Instruction::STA, AddressingMode::ZeroPage, 3)),
            0x86 => Some((Instruction::STX, AddressingMode::ZeroPage, 3)),
            0x87 => None,
            0x88 => Some((Instruction::DEY, AddressingMode::Implied, 2)),
            0x89 => None,
            0x8a => Some((Instruction::TXA, AddressingMode::Implied, 2)),
            0x8b => None,
            0x8c => Some((Instruction::STY, AddressingMode::Absolute, 4)),
            0x8d => Some((Instruction::STA, AddressingMode::Absolute, 4)),
            0x8e => Some((Instruction::STX, AddressingMode::Absolute, 4)),
            0x8f => None,
            0x90 => Some((Instruction::BCC, AddressingMode::Relative, 2)),
            0x91 => Some((Instruction::STA, AddressingMode::IndirectIndexedY, 6)),
            0x92 => None,
            0x93 => None,
            0x94 => Some((Instruction::STY, AddressingMode::ZeroPageX, 3)),
            0x95 => Some((Instruction::STA, AddressingMode::ZeroPageX, 3)),
            0x96 => Some((Instruction::STX, AddressingMode::ZeroPageY, 4)),
            0x97 => None,
            0x98 => Some((Instruction::TYA, AddressingMode::Implied, 2)),
            0x99 => Some((Instruction::STA, AddressingMode::AbsoluteY, 5)),
            0x9a => Some((Instruction::TXS, AddressingMode::Implied, 2)),
            0x9b => None,
            0x9c => None,
            0x9d => Some((Instruction::STA, AddressingMode::AbsoluteX, 5)),
            0x9e => None,
            0x9f => None,
            0xa0 => Some((Instruction::LDY, AddressingMode::Immediate, 2)),
            0xa1 => Some((Instruction::LDA, AddressingMode::IndexedIndirectX, 6)),
            0xa2 => Some((Instruction::LDX, AddressingMode::Immediate, 2)),
            0xa3 => None,
            0xa4 => Some((Instruction::LDY, AddressingMode::ZeroPage, 3)),
            0xa5 => Some((Instruction::LDA, AddressingMode::ZeroPage, 3)),
            0xa6 => Some((Instruction::LDX, AddressingMode::ZeroPage, 3)),
            0xa7 => None,
            0xa8 => Some((Instruction::TAY, AddressingMode::Implied, 2)),
            0xa9 => Some((Instruction::LDA, AddressingMode::Immediate, 2)),
            0xaa => Some((Instruction::TAX, AddressingMode::Implied, 2)),
            0xab => None,
            0xac => Some((Instruction::LDY, AddressingMode::Absolute, 4)),
            0xad => Some((Instruction::LDA, AddressingMode::Absolute, 4)),
            0xae => Some((Instruction::LDX, AddressingMode::Absolute, 4)),
            0xaf => None,
            0xb0 => Some((Instruction::BCS, AddressingMode::Relative, 2)),
            0xb1 => Some((Instruction::LDA, AddressingMode::IndirectIndexedY, 5)),
            0xb2 => None,
            0xb3 => None,
            0xb4 => Some((Instruction::LDY, AddressingMode::ZeroPageX, 3)),
            0xb5 => Some((Instruction::LDA, AddressingMode::ZeroPageX, 3)),
            0xb6 => Some((Instruction::LDX, AddressingMode::ZeroPageY, 3)),
            0xb7 => None,
            0xb8 => Some((Instruction::CLV, AddressingMode::Implied, 2)),
            0xb9 => Some((Instruction::LDA, AddressingMode::AbsoluteY, 4)),
            0xba => Some((Instruction::TSX, AddressingMode::Implied, 2)),
            0xbb => None,
            0xbc => Some((Instruction::LDY, AddressingMode::AbsoluteX, 4)),
            0xbd => Some((Instruction::LDA, AddressingMode::AbsoluteX, 4)),
            0xbe => Some((Instruction::LDX, AddressingMode::AbsoluteY, 4)),
            0xbf => None,
            0xc0 => Some((Instruction::CPY, AddressingMode::Immediate, 2)),
            0xc1 => Some((Instruction::CMP, AddressingMode::IndexedIndirectX, 6)),
            0xc2 => None,
            0xc3 => None,
            0xc4 => Some((Instruction::CPY, AddressingMode::ZeroPage, 3)),
            0xc5 => Some((Instruction::CMP, AddressingMode::ZeroPage, 3)),
            0xc6 => Some((Instruction::DEC, AddressingMode::ZeroPage, 5)),
            0xc7 => None,
            0xc8 => Some((Instruction::INY, AddressingMode::Implied, 2)),
            0xc9 => Some((Instruction::CMP, AddressingMode::Immediate, 2)),
            0xca => Some((Instruction::DEX, AddressingMode::Implied, 2)),
            0xcb => None,
            0xcc => Some((Instruction::CPY, AddressingMode::Absolute, 4)),
            0xcd => Some((Instruction::CMP, AddressingMode::Absolute, 4)),
            0xce => Some((Instruction::DEC, AddressingMode::Absolute, 6)),
            0xcf => None,
            0xd0 => Some((Instruction::BNE, AddressingMode::Relative, 2)),
            0xd1 => Some((Instruction::CMP, AddressingMode::IndirectIndexedY, 5)),
            0xd2 => None,
            0xd3 => None,
            0xd4 => None,
            0xd5 => Some((Instruction::CMP, AddressingMode::ZeroPageX, 3)),
            0xd6 => Some((Instruction::DEC, AddressingMode::ZeroPageX, 5)),
            0xd7 => None,
            0xd8 => Some((Instruction::CLD, AddressingMode::Implied, 2)),
            0xd9 => Some((Instruction::CMP, AddressingMode::AbsoluteY, 4)),
            0xda => None,
            0xdb => None,
            0xdc => None,
            0xdd => Some((Instruction::CMP, AddressingMode::AbsoluteX, 4)),
            0xde => Some((Instruction::DEC, AddressingMode::AbsoluteX, 7)),
            0xdf => None,
            0xe0 => Some((Instruction::CPX, AddressingMode::Immediate, 2)),
            0xe1 => Some((Instruction::SBC, AddressingMode::IndexedIndirectX, 6)),
            0xe2 => None,
            0xe3 => None,
            0xe4 => Some((Instruction::CPX, AddressingMode::ZeroPage, 3)),
            0xe5 => Some((Instruction::SBC, AddressingMode::ZeroPage, 3)),
            0xe6 => Some((Instruction::INC, AddressingMode::ZeroPage, 5)),
            0xe7 => None,
            0xe8 => Some((Instruction::INX, AddressingMode::Implied, 2)),
            0xe9 => Some((Instruction::SBC, AddressingMode::Immediate, 2)),
            0xea => Some((Instruction::NOP, AddressingMode::Implied, 2)),
            0xeb => None,
            0xec => Some((Instruction::CPX, AddressingMode::Absolute, 4)),
            0xed => Some((Instruction::SBC, AddressingMode::Absolute, 4)),
            0xee => Some((Instruction::INC, AddressingMode::Absolute, 7)),
            0xef => None,
            0xf0 => Some((Instruction::BEQ, AddressingMode::Relative, 2)),
            0xf1 => Some((Instruction::SBC, AddressingMode::IndirectIndexedY, 5)),
            0xf2 => None,
            0xf3 => None,
            0xf4 => None,
            0xf5 => Some((Instruction::SBC, AddressingMode::ZeroPageX, 3)),
            0xf6 => Some((Instruction::INC, AddressingMode::ZeroPageX, 5)),
            0xf7 => None,
            0xf8 => Some((Instruction::SED, AddressingMode::Implied, 2)),
            0xf9 => Some((Instruction::SBC, AddressingMode::AbsoluteY, 4)),
            0xfa => None,
            0xfb => None,
            0xfc => None,
            0xfd => Some((Instruction::SBC, AddressingMode::AbsoluteX, 4)),
            0xfe => Some((Instruction::INC, AddressingMode::AbsoluteX, 7)),
            0xff => None,
        }
    }
}

/// The WDC65C02, Western Design Center's CMOS redesign. Fixes the
/// JMP-indirect bug, clears decimal mode on interrupt entry, takes 7 cycles
/// to reset, and adds 27 instructions along with the zero page indirect and
/// absolute indexed indirect addressing modes. Every opcode byte decodes:
/// the unassigned ones are NOPs of documented length and cost.
#[derive(Copy, Clone, Debug)]
pub struct Wdc65c02;

impl crate::Variant for Wdc65c02 {
    const NAME: &'static str = "WDC65C02";
    const RESET_CYCLES: u32 = 7;
    const CLEARS_DECIMAL_ON_INTERRUPT: bool = true;

    fn decode(opcode: u8) -> Option<OpcodeEntry> {
        match opcode {
            0x00 => Some((Instruction::BRK, AddressingMode::Implied, 7)),
            0x01 => Some((Instruction::ORA, AddressingMode::IndexedIndirectX, 6)),
            0x02 => Some((Instruction::NOP, AddressingMode::Immediate, 2)),
            0x03 => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0x04 => Some((Instruction::TSB, AddressingMode::ZeroPage, 5)),
            0x05 => Some((Instruction::ORA, AddressingMode::ZeroPage, 3)),
            0x06 => Some((Instruction::ASL, AddressingMode::ZeroPage, 5)),
            0x07 => Some((Instruction::RMB(0), AddressingMode::ZeroPage, 5)),
            0x08 => Some((Instruction::PHP, AddressingMode::Implied, 3)),
            0x09 => Some((Instruction::ORA, AddressingMode::Immediate, 2)),
            0x0a => Some((Instruction::ASL, AddressingMode::Accumulator, 2)),
            0x0b => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0x0c => Some((Instruction::TSB, AddressingMode::Absolute, 6)),
            0x0d => Some((Instruction::ORA, AddressingMode::Absolute, 4)),
            0x0e => Some((Instruction::ASL, AddressingMode::Absolute, 6)),
            0x0f => Some((Instruction::BBR(0), AddressingMode::ZeroPage, 5)),
            0x10 => Some((Instruction::BPL, AddressingMode::Relative, 2)),
            0x11 => Some((Instruction::ORA, AddressingMode::IndirectIndexedY, 5)),
            0x12 => Some((Instruction::ORA, AddressingMode::ZeroPageIndirect, 5)),
            0x13 => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0x14 => Some((Instruction::TRB, AddressingMode::ZeroPage, 5)),
            0x15 => Some((Instruction::ORA, AddressingMode::ZeroPageX, 4)),
            0x16 => Some((Instruction::ASL, AddressingMode::ZeroPageX, 6)),
            0x17 => Some((Instruction::RMB(1), AddressingMode::ZeroPage, 5)),
            0x18 => Some((Instruction::CLC, AddressingMode::Implied, 2)),
            0x19 => Some((Instruction::ORA, AddressingMode::AbsoluteY, 4)),
            0x1a => Some((Instruction::INC, AddressingMode::Accumulator, 2)),
            0x1b => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0x1c => Some((Instruction::TRB, AddressingMode::Absolute, 6)),
            0x1d => Some((Instruction::ORA, AddressingMode::AbsoluteX, 4)),
            0x1e => Some((Instruction::ASL, AddressingMode::AbsoluteX, 7)),
            0x1f => Some((Instruction::BBR(1), AddressingMode::ZeroPage, 5)),
            0x20 => Some((Instruction::JSR, AddressingMode::Absolute, 6)),
            0x21 => Some((Instruction::AND, AddressingMode::IndexedIndirectX, 6)),
            0x22 => Some((Instruction::NOP, AddressingMode::Immediate, 2)),
            0x23 => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0x24 => Some((Instruction::BIT, AddressingMode::ZeroPage, 3)),
            0x25 => Some((Instruction::AND, AddressingMode::ZeroPage, 3)),
            0x26 => Some((Instruction::ROL, AddressingMode::ZeroPage, 5)),
            0x27 => Some((Instruction::RMB(2), AddressingMode::ZeroPage, 5)),
            0x28 => Some((Instruction::PLP, AddressingMode::Implied, 4)),
            0x29 => Some((Instruction::AND, AddressingMode::Immediate, 2)),
            0x2a => Some((Instruction::ROL, AddressingMode::Accumulator, 2)),
            0x2b => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0x2c => Some((Instruction::BIT, AddressingMode::Absolute, 4)),
            0x2d => Some((Instruction::AND, AddressingMode::Absolute, 4)),
            0x2e => Some((Instruction::ROL, AddressingMode::Absolute, 6)),
            0x2f => Some((Instruction::BBR(2), AddressingMode::ZeroPage, 5)),
            0x30 => Some((Instruction::BMI, AddressingMode::Relative, 2)),
            0x31 => Some((Instruction::AND, AddressingMode::IndirectIndexedY, 5)),
            0x32 => Some((Instruction::AND, AddressingMode::ZeroPageIndirect, 5)),
            0x33 => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0x34 => Some((Instruction::BIT, AddressingMode::ZeroPageX, 4)),
            0x35 => Some((Instruction::AND, AddressingMode::ZeroPageX, 4)),
            0x36 => Some((Instruction::ROL, AddressingMode::ZeroPageX, 6)),
            0x37 => Some((Instruction::RMB(3), AddressingMode::ZeroPage, 5)),
            0x38 => Some((Instruction::SEC, AddressingMode::Implied, 2)),
            0x39 => Some((Instruction::AND, AddressingMode::AbsoluteY, 4)),
            0x3a => Some((Instruction::DEC, AddressingMode::Accumulator, 2)),
            0x3b => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0x3c => Some((Instruction::BIT, AddressingMode::AbsoluteX, 4)),
            0x3d => Some((Instruction::AND, AddressingMode::AbsoluteX, 4)),
            0x3e => Some((Instruction::ROL, AddressingMode::AbsoluteX, 7)),
            0x3f => Some((Instruction::BBR(3), AddressingMode::ZeroPage, 5)),
            0x40 => Some((Instruction::RTI, AddressingMode::Implied, 6)),
            0x41 => Some((Instruction::EOR, AddressingMode::IndexedIndirectX, 6)),
            0x42 => Some((Instruction::NOP, AddressingMode::Immediate, 2)),
            0x43 => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0x44 => Some((Instruction::NOP, AddressingMode::ZeroPage, 3)),
            0x45 => Some((Instruction::EOR, AddressingMode::ZeroPage, 3)),
            0x46 => Some((Instruction::LSR, AddressingMode::ZeroPage, 5)),
            0x47 => Some((Instruction::RMB(4), AddressingMode::ZeroPage, 5)),
            0x48 => Some((Instruction::PHA, AddressingMode::Implied, 3)),
            0x49 => Some((Instruction::EOR, AddressingMode::Immediate, 2)),
            0x4a => Some((Instruction::LSR, AddressingMode::Accumulator, 2)),
            0x4b => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0x4c => Some((Instruction::JMP, AddressingMode::Absolute, 3)),
            0x4d => Some((Instruction::EOR, AddressingMode::Absolute, 4)),
            0x4e => Some((Instruction::LSR, AddressingMode::Absolute, 6)),
            0x4f => Some((Instruction::BBR(4), AddressingMode::ZeroPage, 5)),
            0x50 => Some((Instruction::BVC, AddressingMode::Relative, 2)),
            0x51 => Some((Instruction::EOR, AddressingMode::IndirectIndexedY, 5)),
            0x52 => Some((Instruction::EOR, AddressingMode::ZeroPageIndirect, 5)),
            0x53 => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0x54 => Some((Instruction::NOP, AddressingMode::ZeroPage, 4)),
            0x55 => Some((Instruction::EOR, AddressingMode::ZeroPageX, 4)),
            0x56 => Some((Instruction::LSR, AddressingMode::ZeroPageX, 6)),
            0x57 => Some((Instruction::RMB(5), AddressingMode::ZeroPage, 5)),
            0x58 => Some((Instruction::CLI, AddressingMode::Implied, 2)),
            0x59 => Some((Instruction::EOR, AddressingMode::AbsoluteY, 4)),
            0x5a => Some((Instruction::PHY, AddressingMode::Implied, 3)),
            0x5b => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0x5c => Some((Instruction::NOP, AddressingMode::Absolute, 8)),
            0x5d => Some((Instruction::EOR, AddressingMode::AbsoluteX, 4)),
            0x5e => Some((Instruction::LSR, AddressingMode::AbsoluteX, 6)),
            0x5f => Some((Instruction::BBR(5), AddressingMode::ZeroPage, 5)),
            0x60 => Some((Instruction::RTS, AddressingMode::Implied, 6)),
            0x61 => Some((Instruction::ADC, AddressingMode::IndexedIndirectX, 6)),
            0x62 => Some((Instruction::NOP, AddressingMode::Immediate, 2)),
            0x63 => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0x64 => Some((Instruction::STZ, AddressingMode::ZeroPage, 3)),
            0x65 => Some((Instruction::ADC, AddressingMode::ZeroPage, 3)),
            0x66 => Some((Instruction::ROR, AddressingMode::ZeroPage, 5)),
            0x67 => Some((Instruction::RMB(6), AddressingMode::ZeroPage, 5)),
            0x68 => Some((Instruction::PLA, AddressingMode::Implied, 4)),
            0x69 => Some((Instruction::ADC, AddressingMode::Immediate, 2)),
            0x6a => Some((Instruction::ROR, AddressingMode::Accumulator, 2)),
            0x6b => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0x6c => Some((Instruction::JMP, AddressingMode::Indirect, 5)),
            0x6d => Some((Instruction::ADC, AddressingMode::Absolute, 4)),
            0x6e => Some((Instruction::ROR, AddressingMode::Absolute, 6)),
            0x6f => Some((Instruction::BBR(6), AddressingMode::ZeroPage, 5)),
            0x70 => Some((Instruction::BVS, AddressingMode::Relative, 2)),
            0x71 => Some((Instruction::ADC, AddressingMode::IndirectIndexedY, 5)),
            0x72 => Some((Instruction::ADC, AddressingMode::ZeroPageIndirect, 5)),
            0x73 => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0x74 => Some((Instruction::STZ, AddressingMode::ZeroPageX, 4)),
            0x75 => Some((Instruction::ADC, AddressingMode::ZeroPageX, 4)),
            0x76 => Some((Instruction::ROR, AddressingMode::ZeroPageX, 6)),
            0x77 => Some((Instruction::RMB(7), AddressingMode::ZeroPage, 5)),
            0x78 => Some((Instruction::SEI, AddressingMode::Implied, 2)),
            0x79 => Some((Instruction::ADC, AddressingMode::AbsoluteY, 4)),
            0x7a => Some((Instruction::PLY, AddressingMode::Implied, 4)),
            0x7b => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0x7c => Some((Instruction::JMP, AddressingMode::AbsoluteIndexedIndirect, 6)),
            0x7d => Some((Instruction::ADC, AddressingMode::AbsoluteX, 4)),
            0x7e => Some((Instruction::ROR, AddressingMode::AbsoluteX, 7)),
            0x7f => Some((Instruction::BBR(7), AddressingMode::ZeroPage, 5)),
            0x80 => Some((Instruction::BRA, AddressingMode::Relative, 2)),
            0x81 => Some((Instruction::STA, AddressingMode::IndexedIndirectX, 6)),
            0x82 => Some((Instruction::NOP, AddressingMode::Immediate, 2)),
            0x83 => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0x84 => Some((Instruction::STY, AddressingMode::ZeroPage, 3)),
            0x85 => Some((Instruction::STA, AddressingMode::ZeroPage, 3)),
            0x86 => Some((Instruction::STX, AddressingMode::ZeroPage, 3)),
            0x87 => Some((Instruction::SMB(0), AddressingMode::ZeroPage, 5)),
            0x88 => Some((Instruction::DEY, AddressingMode::Implied, 2)),
            0x89 => Some((Instruction::BIT, AddressingMode::Immediate, 2)),
            0x8a => Some((Instruction::TXA, AddressingMode::Implied, 2)),
            0x8b => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0x8c => Some((Instruction::STY, AddressingMode::Absolute, 4)),
            0x8d => Some((Instruction::STA, AddressingMode::Absolute, 4)),
            0x8e => Some((Instruction::STX, AddressingMode::Absolute, 4)),
            0x8f => Some((Instruction::BBS(0), AddressingMode::ZeroPage, 5)),
            0x90 => Some((Instruction::BCC, AddressingMode::Relative, 2)),
            0x91 => Some((Instruction::STA, AddressingMode::IndirectIndexedY, 6)),
            0x92 => Some((Instruction::STA, AddressingMode::ZeroPageIndirect, 5)),
            0x93 => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0x94 => Some((Instruction::STY, AddressingMode::ZeroPageX, 4)),
            0x95 => Some((Instruction::STA, AddressingMode::ZeroPageX, 4)),
            0x96 => Some((Instruction::STX, AddressingMode::ZeroPageY, 4)),
            0x97 => Some((Instruction::SMB(1), AddressingMode::ZeroPage, 5)),
            0x98 => Some((Instruction::TYA, AddressingMode::Implied, 2)),
            0x99 => Some((Instruction::STA, AddressingMode::AbsoluteY, 5)),
            0x9a => Some((Instruction::TXS, AddressingMode::Implied, 2)),
            0x9b => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0x9c => Some((Instruction::STZ, AddressingMode::Absolute, 4)),
            0x9d => Some((Instruction::STA, AddressingMode::AbsoluteX, 5)),
            0x9e => Some((Instruction::STZ, AddressingMode::AbsoluteX, 5)),
            0x9f => Some((Instruction::BBS(1), AddressingMode::ZeroPage, 5)),
            0xa0 => Some((Instruction::LDY, AddressingMode::Immediate, 2)),
            0xa1 => Some((Instruction::LDA, AddressingMode::IndexedIndirectX, 6)),
            0xa2 => Some((Instruction::LDX, AddressingMode::Immediate, 2)),
            0xa3 => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0xa4 => Some((Instruction::LDY, AddressingMode::ZeroPage, 3)),
            0xa5 => Some((Instruction::LDA, AddressingMode::ZeroPage, 3)),
            0xa6 => Some((Instruction::LDX, AddressingMode::ZeroPage, 3)),
            0xa7 => Some((Instruction::SMB(2), AddressingMode::ZeroPage, 5)),
            0xa8 => Some((Instruction::TAY, AddressingMode::Implied, 2)),
            0xa9 => Some((Instruction::LDA, AddressingMode::Immediate, 2)),
            0xaa => Some((Instruction::TAX, AddressingMode::Implied, 2)),
            0xab => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0xac => Some((Instruction::LDY, AddressingMode::Absolute, 4)),
            0xad => Some((Instruction::LDA, AddressingMode::Absolute, 4)),
            0xae => Some((Instruction::LDX, AddressingMode::Absolute, 4)),
            0xaf => Some((Instruction::BBS(2), AddressingMode::ZeroPage, 5)),
            0xb0 => Some((Instruction::BCS, AddressingMode::Relative, 2)),
            0xb1 => Some((Instruction::LDA, AddressingMode::IndirectIndexedY, 5)),
            0xb2 => Some((Instruction::LDA, AddressingMode::ZeroPageIndirect, 5)),
            0xb3 => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0xb4 => Some((Instruction::LDY, AddressingMode::ZeroPageX, 4)),
            0xb5 => Some((Instruction::LDA, AddressingMode::ZeroPageX, 4)),
            0xb6 => Some((Instruction::LDX, AddressingMode::ZeroPageY, 4)),
            0xb7 => Some((Instruction::SMB(3), AddressingMode::ZeroPage, 5)),
            0xb8 => Some((Instruction::CLV, AddressingMode::Implied, 2)),
            0xb9 => Some((Instruction::LDA, AddressingMode::AbsoluteY, 4)),
            0xba => Some((Instruction::TSX, AddressingMode::Implied, 2)),
            0xbb => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0xbc => Some((Instruction::LDY, AddressingMode::AbsoluteX, 4)),
            0xbd => Some((Instruction::LDA, AddressingMode::AbsoluteX, 4)),
            0xbe => Some((Instruction::LDX, AddressingMode::AbsoluteY, 4)),
            0xbf => Some((Instruction::BBS(3), AddressingMode::ZeroPage, 5)),
            0xc0 => Some((Instruction::CPY, AddressingMode::Immediate, 2)),
            0xc1 => Some((Instruction::CMP, AddressingMode::IndexedIndirectX, 6)),
            0xc2 => Some((Instruction::NOP, AddressingMode::Immediate, 2)),
            0xc3 => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0xc4 => Some((Instruction::CPY, AddressingMode::ZeroPage, 3)),
            0xc5 => Some((Instruction::CMP, AddressingMode::ZeroPage, 3)),
            0xc6 => Some((Instruction::DEC, AddressingMode::ZeroPage, 5)),
            0xc7 => Some((Instruction::SMB(4), AddressingMode::ZeroPage, 5)),
            0xc8 => Some((Instruction::INY, AddressingMode::Implied, 2)),
            0xc9 => Some((Instruction::CMP, AddressingMode::Immediate, 2)),
            0xca => Some((Instruction::DEX, AddressingMode::Implied, 2)),
            0xcb => Some((Instruction::WAI, AddressingMode::Implied, 3)),
            0xcc => Some((Instruction::CPY, AddressingMode::Absolute, 4)),
            0xcd => Some((Instruction::CMP, AddressingMode::Absolute, 4)),
            0xce => Some((Instruction::DEC, AddressingMode::Absolute, 6)),
            0xcf => Some((Instruction::BBS(4), AddressingMode::ZeroPage, 5)),
            0xd0 => Some((Instruction::BNE, AddressingMode::Relative, 2)),
            0xd1 => Some((Instruction::CMP, AddressingMode::IndirectIndexedY, 5)),
            0xd2 => Some((Instruction::CMP, AddressingMode::ZeroPageIndirect, 5)),
            0xd3 => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0xd4 => Some((Instruction::NOP, AddressingMode::ZeroPage, 4)),
            0xd5 => Some((Instruction::CMP, AddressingMode::ZeroPageX, 4)),
            0xd6 => Some((Instruction::DEC, AddressingMode::ZeroPageX, 6)),
            0xd7 => Some((Instruction::SMB(5), AddressingMode::ZeroPage, 5)),
            0xd8 => Some((Instruction::CLD, AddressingMode::Implied, 2)),
            0xd9 => Some((Instruction::CMP, AddressingMode::AbsoluteY, 4)),
            0xda => Some((Instruction::PHX, AddressingMode::Implied, 3)),
            0xdb => Some((Instruction::STP, AddressingMode::Implied, 3)),
            0xdc => Some((Instruction::NOP, AddressingMode::Absolute, 4)),
            0xdd => Some((Instruction::CMP, AddressingMode::AbsoluteX, 4)),
            0xde => Some((Instruction::DEC, AddressingMode::AbsoluteX, 7)),
            0xdf => Some((Instruction::BBS(5), AddressingMode::ZeroPage, 5)),
            0xe0 => Some((Instruction::CPX, AddressingMode::Immediate, 2)),
            0xe1 => Some((Instruction::SBC, AddressingMode::IndexedIndirectX, 6)),
            0xe2 => Some((Instruction::NOP, AddressingMode::Immediate, 2)),
            0xe3 => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0xe4 => Some((Instruction::CPX, AddressingMode::ZeroPage, 3)),
            0xe5 => Some((Instruction::SBC, AddressingMode::ZeroPage, 3)),
            0xe6 => Some((Instruction::INC, AddressingMode::ZeroPage, 5)),
            0xe7 => Some((Instruction::SMB(6), AddressingMode::ZeroPage, 5)),
            0xe8 => Some((Instruction::INX, AddressingMode::Implied, 2)),
            0xe9 => Some((Instruction::SBC, AddressingMode::Immediate, 2)),
            0xea => Some((Instruction::NOP, AddressingMode::Implied, 2)),
            0xeb => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0xec => Some((Instruction::CPX, AddressingMode::Absolute, 4)),
            0xed => Some((Instruction::SBC, AddressingMode::Absolute, 4)),
            0xee => Some((Instruction::INC, AddressingMode::Absolute, 6)),
            0xef => Some((Instruction::BBS(6), AddressingMode::ZeroPage, 5)),
            0xf0 => Some((Instruction::BEQ, AddressingMode::Relative, 2)),
            0xf1 => Some((Instruction::SBC, AddressingMode::IndirectIndexedY, 5)),
            0xf2 => Some((Instruction::SBC, AddressingMode::ZeroPageIndirect, 5)),
            0xf3 => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0xf4 => Some((Instruction::NOP, AddressingMode::ZeroPage, 4)),
            0xf5 => Some((Instruction::SBC, AddressingMode::ZeroPageX, 4)),
            0xf6 => Some((Instruction::INC, AddressingMode::ZeroPageX, 6)),
            0xf7 => Some((Instruction::SMB(7), AddressingMode::ZeroPage, 5)),
            0xf8 => Some((Instruction::SED, AddressingMode::Implied, 2)),
            0xf9 => Some((Instruction::SBC, AddressingMode::AbsoluteY, 4)),
            0xfa => Some((Instruction::PLX, AddressingMode::Implied, 4)),
            0xfb => Some((Instruction::NOP, AddressingMode::Implied, 1)),
            0xfc => Some((Instruction::NOP, AddressingMode::Absolute, 4)),
            0xfd => Some((Instruction::SBC, AddressingMode::AbsoluteX, 4)),
            0xfe => Some((Instruction::INC, AddressingMode::AbsoluteX, 7)),
            0xff => Some((Instruction::BBS(7), AddressingMode::ZeroPage, 5)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Variant;

    #[test]
    fn nmos_defines_the_151_documented_opcodes() {
        let defined = (0u16..=0xFF)
            .filter(|opcode| Nmos6502::decode(*opcode as u8).is_some())
            .count();
        assert_eq!(defined, 151);
    }

    #[test]
    fn wdc65c02_decodes_every_opcode_byte() {
        for opcode in 0u16..=0xFF {
            assert!(
                Wdc65c02::decode(opcode as u8).is_some(),
                "opcode {opcode:02x} must decode"
            );
        }
    }

    #[test]
    fn wdc65c02_defines_212_non_filler_entries() {
        let defined = (0u16..=0xFF)
            .filter(|opcode| {
                matches!(
                    Wdc65c02::decode(*opcode as u8),
                    Some((instruction, _, _)) if instruction != Instruction::NOP
                )
            })
            .count();
        // The canonical NOP (0xEA) is an assigned opcode, not a filler.
        assert_eq!(defined + 1, 212);
    }

    #[test]
    fn every_nmos_opcode_survives_on_the_wdc65c02() {
        // All 151 documented opcodes stay assigned, though a few change
        // details (0x6C loses the page-wrap bug, some cycle counts differ).
        for opcode in 0u16..=0xFF {
            let opcode = opcode as u8;
            if let Some((instruction, _, _)) = Nmos6502::decode(opcode) {
                let (wdc_instruction, _, _) =
                    Wdc65c02::decode(opcode).expect("documented opcode missing");
                assert_eq!(instruction, wdc_instruction, "opcode {opcode:02x}");
            }
        }
    }

    #[test]
    fn jmp_indirect_differs_between_variants() {
        assert_eq!(
            Nmos6502::decode(0x6c),
            Some((Instruction::JMP, AddressingMode::BuggyIndirect, 5))
        );
        assert_eq!(
            Wdc65c02::decode(0x6c),
            Some((Instruction::JMP, AddressingMode::Indirect, 5))
        );
    }
}
