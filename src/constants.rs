//! Hardware constants and static lookup tables for the acquisition engine.
//!
//! Numeric tables in this file are transcribed verbatim from the reference
//! engine's static initializers; do not "clean up" or recompute them.

/// Correlator window width per output phase. See DESIGN.md for how this was
/// resolved from the reference source (no header with the literal was
/// retrieved, but `PreloadSample`'s address arithmetic and the scheduler's
/// cycle formula both pin it to 682).
pub const MF_CORE_DEPTH: usize = 682;
/// PRN chips consumed per matched-filter call (`MF_CORE_DEPTH / 2`).
pub const ADDER_TREE_WIDTH: usize = MF_CORE_DEPTH / 2;
/// DFT bins per coherent epoch.
pub const DFT_NUMBER: usize = 8;
/// Size in bytes of the circular input-sample ring buffer.
pub const AE_BUFFER_SIZE: usize = 65536;
/// Compile-time mode select: the reference model runs 3-segment mode.
pub const FULL_LENGTH: bool = false;
/// Simulated AE clock, used only by the scheduling-time estimate.
pub const AE_CLK_MHZ: u64 = 100;
pub const BLOCK_US: u64 = 1000;
pub const CLK_NUMBER_IN_BLOCK: u64 = AE_CLK_MHZ * BLOCK_US;

/// Upper bound on channel count addressable by the 6-bit `ChannelNumber`
/// field (§3, word 0 bits [5:0]).
pub const MAX_CHANNELS: usize = 64;

/// Byte address offsets within the AE register window (§6). The original
/// header defining these addresses was not part of the retrieval pack;
/// values below are a self-consistent simulated layout.
pub const ADDR_OFFSET_AE_CONTROL: u32 = 0x00;
pub const ADDR_OFFSET_AE_BUFFER_CONTROL: u32 = 0x04;
pub const ADDR_OFFSET_AE_STATUS: u32 = 0x08;
pub const ADDR_OFFSET_AE_CARRIER_FREQ: u32 = 0x0c;
pub const ADDR_OFFSET_AE_CODE_RATIO: u32 = 0x10;
pub const ADDR_OFFSET_AE_THRESHOLD: u32 = 0x14;

/// Literal decimal masks used by the reference control-register handler.
/// Neither is the "obvious" `0x100`/`0x200` bit test one would expect from
/// the §6 register-map prose -- this is intentional, see DESIGN.md and the
/// call site in `registers.rs`.
pub const RESET_RATE_ADAPTOR_MASK: u32 = 200;
pub const START_FILL_MASK: u32 = 100;
pub const DO_ACQUIRE_MASK: u32 = 0x100;

/// `(G2 tap mask << 14) | G1 tap mask`, packed the way `CGeneralPrn` expects
/// its two-entry polynomial table. Bit positions of the low 14 bits are the
/// G1 feedback taps (2, 9); bit positions of the high 14 bits are the G2
/// feedback taps (1, 2, 5, 7, 8, 9) -- exactly the tap pair the reference
/// receiver's own `gold_code::G1_TAP`/`G2_TAP` arrays already encode.
pub const PRN_POLY_SETTINGS: [u32; 2] = [(0x3a6 << 14) | 0x204, 1023 << 14];

/// GPS L1 C/A (PRN 1-32) and SBAS L1 (PRN 120-138) LFSR phase-init words.
pub const GPS_INIT: [u32; 32 + 19] = [
    0x037ffff1, 0x01bffff1, 0x00dffff1, 0x006ffff1, 0x06903ff1, 0x03483ff1, 0x069bbff1,
    0x034dfff1, 0x01a6fff1, 0x02eefff1, 0x01777ff1, 0x005dfff1, 0x002efff1, 0x00177ff1,
    0x000bbff1, 0x0005fff1, 0x06447ff1, 0x03223ff1, 0x01913ff1, 0x00c8bff1, 0x00647ff1,
    0x00323ff1, 0x07333ff1, 0x00e67ff1, 0x00733ff1, 0x0039bff1, 0x001cfff1, 0x000e7ff1,
    0x06a23ff1, 0x03513ff1, 0x01a8bff1, 0x00d47ff1, // PRN1-32
    0x091a7ff1, 0x0a863ff1, 0x02dcfff1, 0x02693ff1, 0x0e3e3ff1, 0x08f87ff1, 0x0fd27ff1,
    0x073d7ff1, 0x0d6afff1, 0x0aa37ff1, 0x03857ff1, 0x05a57ff1, 0x05433ff1, 0x0f67bff1,
    0x07183ff1, 0x0a387ff1, 0x07833ff1, 0x081e3ff1, 0x04a13ff1, // PRN120-138
];

/// BeiDou B1C (data/pilot share the same Weil generator) phase-init words.
pub const B1C_INIT: [u32; 63] = [
    (8 << 28) + 796 + ((7575 - 1) << 14),
    (8 << 28) + 156 + ((2369 - 1) << 14),
    (8 << 28) + 4198 + ((5688 - 1) << 14),
    (8 << 28) + 3941 + ((539 - 1) << 14),
    (8 << 28) + 1374 + ((2270 - 1) << 14),
    (8 << 28) + 1338 + ((7306 - 1) << 14),
    (8 << 28) + 1833 + ((6457 - 1) << 14),
    (8 << 28) + 2521 + ((6254 - 1) << 14),
    (8 << 28) + 3175 + ((5644 - 1) << 14),
    (8 << 28) + 168 + ((7119 - 1) << 14),
    (8 << 28) + 2715 + ((1402 - 1) << 14),
    (8 << 28) + 4408 + ((5557 - 1) << 14),
    (8 << 28) + 3160 + ((5764 - 1) << 14),
    (8 << 28) + 2796 + ((1073 - 1) << 14),
    (8 << 28) + 459 + ((7001 - 1) << 14),
    (8 << 28) + 3594 + ((5910 - 1) << 14),
    (8 << 28) + 4813 + ((10060 - 1) << 14),
    (8 << 28) + 586 + ((2710 - 1) << 14),
    (8 << 28) + 1428 + ((1546 - 1) << 14),
    (8 << 28) + 2371 + ((6887 - 1) << 14),
    (8 << 28) + 2285 + ((1883 - 1) << 14),
    (8 << 28) + 3377 + ((5613 - 1) << 14),
    (8 << 28) + 4965 + ((5062 - 1) << 14),
    (8 << 28) + 3779 + ((1038 - 1) << 14),
    (8 << 28) + 4547 + ((10170 - 1) << 14),
    (8 << 28) + 1646 + ((6484 - 1) << 14),
    (8 << 28) + 1430 + ((1718 - 1) << 14),
    (8 << 28) + 607 + ((2535 - 1) << 14),
    (8 << 28) + 2118 + ((1158 - 1) << 14),
    (8 << 28) + 4709 + ((526 - 1) << 14),
    (8 << 28) + 1149 + ((7331 - 1) << 14),
    (8 << 28) + 3283 + ((5844 - 1) << 14),
    (8 << 28) + 2473 + ((6423 - 1) << 14),
    (8 << 28) + 1006 + ((6968 - 1) << 14),
    (8 << 28) + 3670 + ((1280 - 1) << 14),
    (8 << 28) + 1817 + ((1838 - 1) << 14),
    (8 << 28) + 771 + ((1989 - 1) << 14),
    (8 << 28) + 2173 + ((6468 - 1) << 14),
    (8 << 28) + 740 + ((2091 - 1) << 14),
    (8 << 28) + 1433 + ((1581 - 1) << 14),
    (8 << 28) + 2458 + ((1453 - 1) << 14),
    (8 << 28) + 3459 + ((6252 - 1) << 14),
    (8 << 28) + 2155 + ((7122 - 1) << 14),
    (8 << 28) + 1205 + ((7711 - 1) << 14),
    (8 << 28) + 413 + ((7216 - 1) << 14),
    (8 << 28) + 874 + ((2113 - 1) << 14),
    (8 << 28) + 2463 + ((1095 - 1) << 14),
    (8 << 28) + 1106 + ((1628 - 1) << 14),
    (8 << 28) + 1590 + ((1713 - 1) << 14),
    (8 << 28) + 3873 + ((6102 - 1) << 14),
    (8 << 28) + 4026 + ((6123 - 1) << 14),
    (8 << 28) + 4272 + ((6070 - 1) << 14),
    (8 << 28) + 3556 + ((1115 - 1) << 14),
    (8 << 28) + 128 + ((8047 - 1) << 14),
    (8 << 28) + 1200 + ((6795 - 1) << 14),
    (8 << 28) + 130 + ((2575 - 1) << 14),
    (8 << 28) + 4494 + ((53 - 1) << 14),
    (8 << 28) + 1871 + ((1729 - 1) << 14),
    (8 << 28) + 3073 + ((6388 - 1) << 14),
    (8 << 28) + 4386 + ((682 - 1) << 14),
    (8 << 28) + 4098 + ((5565 - 1) << 14),
    (8 << 28) + 1923 + ((7160 - 1) << 14),
    (8 << 28) + 1176 + ((2277 - 1) << 14),
];

/// GPS L1C (data/pilot share the same Weil generator) phase-init words.
pub const L1C_INIT: [u32; 63] = [
    (10 << 28) + 5097 + ((181 - 1) << 14),
    (10 << 28) + 5110 + ((359 - 1) << 14),
    (10 << 28) + 5079 + ((72 - 1) << 14),
    (10 << 28) + 4403 + ((1110 - 1) << 14),
    (10 << 28) + 4121 + ((1480 - 1) << 14),
    (10 << 28) + 5043 + ((5034 - 1) << 14),
    (10 << 28) + 5042 + ((4622 - 1) << 14),
    (10 << 28) + 5104 + ((1 - 1) << 14),
    (10 << 28) + 4940 + ((4547 - 1) << 14),
    (10 << 28) + 5035 + ((826 - 1) << 14),
    (10 << 28) + 4372 + ((6284 - 1) << 14),
    (10 << 28) + 5064 + ((4195 - 1) << 14),
    (10 << 28) + 5084 + ((368 - 1) << 14),
    (10 << 28) + 5048 + ((1 - 1) << 14),
    (10 << 28) + 4950 + ((4796 - 1) << 14),
    (10 << 28) + 5019 + ((523 - 1) << 14),
    (10 << 28) + 5076 + ((151 - 1) << 14),
    (10 << 28) + 3736 + ((713 - 1) << 14),
    (10 << 28) + 4993 + ((9850 - 1) << 14),
    (10 << 28) + 5060 + ((5734 - 1) << 14),
    (10 << 28) + 5061 + ((34 - 1) << 14),
    (10 << 28) + 5096 + ((6142 - 1) << 14),
    (10 << 28) + 4983 + ((190 - 1) << 14),
    (10 << 28) + 4783 + ((644 - 1) << 14),
    (10 << 28) + 4991 + ((467 - 1) << 14),
    (10 << 28) + 4815 + ((5384 - 1) << 14),
    (10 << 28) + 4443 + ((801 - 1) << 14),
    (10 << 28) + 4769 + ((594 - 1) << 14),
    (10 << 28) + 4879 + ((4450 - 1) << 14),
    (10 << 28) + 4894 + ((9437 - 1) << 14),
    (10 << 28) + 4985 + ((4307 - 1) << 14),
    (10 << 28) + 5056 + ((5906 - 1) << 14),
    (10 << 28) + 4921 + ((378 - 1) << 14),
    (10 << 28) + 5036 + ((9448 - 1) << 14),
    (10 << 28) + 4812 + ((9432 - 1) << 14),
    (10 << 28) + 4838 + ((5849 - 1) << 14),
    (10 << 28) + 4855 + ((5547 - 1) << 14),
    (10 << 28) + 4904 + ((9546 - 1) << 14),
    (10 << 28) + 4753 + ((9132 - 1) << 14),
    (10 << 28) + 4483 + ((403 - 1) << 14),
    (10 << 28) + 4942 + ((3766 - 1) << 14),
    (10 << 28) + 4813 + ((3 - 1) << 14),
    (10 << 28) + 4957 + ((684 - 1) << 14),
    (10 << 28) + 4618 + ((9711 - 1) << 14),
    (10 << 28) + 4669 + ((333 - 1) << 14),
    (10 << 28) + 4969 + ((6124 - 1) << 14),
    (10 << 28) + 5031 + ((10216 - 1) << 14),
    (10 << 28) + 5038 + ((4251 - 1) << 14),
    (10 << 28) + 4740 + ((9893 - 1) << 14),
    (10 << 28) + 4073 + ((9884 - 1) << 14),
    (10 << 28) + 4843 + ((4627 - 1) << 14),
    (10 << 28) + 4979 + ((4449 - 1) << 14),
    (10 << 28) + 4867 + ((9798 - 1) << 14),
    (10 << 28) + 4964 + ((985 - 1) << 14),
    (10 << 28) + 5025 + ((4272 - 1) << 14),
    (10 << 28) + 4579 + ((126 - 1) << 14),
    (10 << 28) + 4390 + ((10024 - 1) << 14),
    (10 << 28) + 4763 + ((434 - 1) << 14),
    (10 << 28) + 4612 + ((1029 - 1) << 14),
    (10 << 28) + 4784 + ((561 - 1) << 14),
    (10 << 28) + 3716 + ((289 - 1) << 14),
    (10 << 28) + 4703 + ((638 - 1) << 14),
    (10 << 28) + 4851 + ((4353 - 1) << 14),
];

/// Carrier mixer product tables, indexed `[sample(0..15)][phase(0..63)]`.
/// The amplitude profile is intentionally non-sinusoidal; reproduce the
/// literal values, do not regenerate from trig functions (§9).
#[rustfmt::skip]
pub const MIXER_I: [[i32; 64]; 16] = [
    [7,8,9,9,9,10,10,10,10,10,10,9,9,9,8,7,7,6,5,5,3,2,2,0,0,-2,-2,-3,-5,-5,-6,-7,-7,-8,-9,-9,-9,-10,-10,-10,-10,-10,-10,-9,-9,-9,-8,-7,-7,-6,-5,-5,-3,-2,-2,0,0,2,2,3,5,5,6,7],
    [7,10,13,13,15,18,18,20,20,22,22,21,23,23,22,21,21,20,19,19,15,14,14,10,10,6,6,3,-1,-1,-4,-7,-7,-10,-13,-13,-15,-18,-18,-20,-20,-22,-22,-21,-23,-23,-22,-21,-21,-20,-19,-19,-15,-14,-14,-10,-10,-6,-6,-3,1,1,4,7],
    [7,6,5,5,3,2,2,0,0,-2,-2,-3,-5,-5,-6,-7,-7,-8,-9,-9,-9,-10,-10,-10,-10,-10,-10,-9,-9,-9,-8,-7,-7,-6,-5,-5,-3,-2,-2,0,0,2,2,3,5,5,6,7,7,8,9,9,9,10,10,10,10,10,10,9,9,9,8,7],
    [7,4,1,1,-3,-6,-6,-10,-10,-14,-14,-15,-19,-19,-20,-21,-21,-22,-23,-23,-21,-22,-22,-20,-20,-18,-18,-15,-13,-13,-10,-7,-7,-4,-1,-1,3,6,6,10,10,14,14,15,19,19,20,21,21,22,23,23,21,22,22,20,20,18,18,15,13,13,10,7],
    [21,22,23,23,21,22,22,20,20,18,18,15,13,13,10,7,7,4,1,1,-3,-6,-6,-10,-10,-14,-14,-15,-19,-19,-20,-21,-21,-22,-23,-23,-21,-22,-22,-20,-20,-18,-18,-15,-13,-13,-10,-7,-7,-4,-1,-1,3,6,6,10,10,14,14,15,19,19,20,21],
    [21,24,27,27,27,30,30,30,30,30,30,27,27,27,24,21,21,18,15,15,9,6,6,0,0,-6,-6,-9,-15,-15,-18,-21,-21,-24,-27,-27,-27,-30,-30,-30,-30,-30,-30,-27,-27,-27,-24,-21,-21,-18,-15,-15,-9,-6,-6,0,0,6,6,9,15,15,18,21],
    [21,20,19,19,15,14,14,10,10,6,6,3,-1,-1,-4,-7,-7,-10,-13,-13,-15,-18,-18,-20,-20,-22,-22,-21,-23,-23,-22,-21,-21,-20,-19,-19,-15,-14,-14,-10,-10,-6,-6,-3,1,1,4,7,7,10,13,13,15,18,18,20,20,22,22,21,23,23,22,21],
    [21,18,15,15,9,6,6,0,0,-6,-6,-9,-15,-15,-18,-21,-21,-24,-27,-27,-27,-30,-30,-30,-30,-30,-30,-27,-27,-27,-24,-21,-21,-18,-15,-15,-9,-6,-6,0,0,6,6,9,15,15,18,21,21,24,27,27,27,30,30,30,30,30,30,27,27,27,24,21],
    [-7,-6,-5,-5,-3,-2,-2,0,0,2,2,3,5,5,6,7,7,8,9,9,9,10,10,10,10,10,10,9,9,9,8,7,7,6,5,5,3,2,2,0,0,-2,-2,-3,-5,-5,-6,-7,-7,-8,-9,-9,-9,-10,-10,-10,-10,-10,-10,-9,-9,-9,-8,-7],
    [-7,-4,-1,-1,3,6,6,10,10,14,14,15,19,19,20,21,21,22,23,23,21,22,22,20,20,18,18,15,13,13,10,7,7,4,1,1,-3,-6,-6,-10,-10,-14,-14,-15,-19,-19,-20,-21,-21,-22,-23,-23,-21,-22,-22,-20,-20,-18,-18,-15,-13,-13,-10,-7],
    [-7,-8,-9,-9,-9,-10,-10,-10,-10,-10,-10,-9,-9,-9,-8,-7,-7,-6,-5,-5,-3,-2,-2,0,0,2,2,3,5,5,6,7,7,8,9,9,9,10,10,10,10,10,10,9,9,9,8,7,7,6,5,5,3,2,2,0,0,-2,-2,-3,-5,-5,-6,-7],
    [-7,-10,-13,-13,-15,-18,-18,-20,-20,-22,-22,-21,-23,-23,-22,-21,-21,-20,-19,-19,-15,-14,-14,-10,-10,-6,-6,-3,1,1,4,7,7,10,13,13,15,18,18,20,20,22,22,21,23,23,22,21,21,20,19,19,15,14,14,10,10,6,6,3,-1,-1,-4,-7],
    [-21,-20,-19,-19,-15,-14,-14,-10,-10,-6,-6,-3,1,1,4,7,7,10,13,13,15,18,18,20,20,22,22,21,23,23,22,21,21,20,19,19,15,14,14,10,10,6,6,3,-1,-1,-4,-7,-7,-10,-13,-13,-15,-18,-18,-20,-20,-22,-22,-21,-23,-23,-22,-21],
    [-21,-18,-15,-15,-9,-6,-6,0,0,6,6,9,15,15,18,21,21,24,27,27,27,30,30,30,30,30,30,27,27,27,24,21,21,18,15,15,9,6,6,0,0,-6,-6,-9,-15,-15,-18,-21,-21,-24,-27,-27,-27,-30,-30,-30,-30,-30,-30,-27,-27,-27,-24,-21],
    [-21,-22,-23,-23,-21,-22,-22,-20,-20,-18,-18,-15,-13,-13,-10,-7,-7,-4,-1,-1,3,6,6,10,10,14,14,15,19,19,20,21,21,22,23,23,21,22,22,20,20,18,18,15,13,13,10,7,7,4,1,1,-3,-6,-6,-10,-10,-14,-14,-15,-19,-19,-20,-21],
    [-21,-24,-27,-27,-27,-30,-30,-30,-30,-30,-30,-27,-27,-27,-24,-21,-21,-18,-15,-15,-9,-6,-6,0,0,6,6,9,15,15,18,21,21,24,27,27,27,30,30,30,30,30,30,27,27,27,24,21,21,18,15,15,9,6,6,0,0,-6,-6,-9,-15,-15,-18,-21],
];

#[rustfmt::skip]
pub const MIXER_Q: [[i32; 64]; 16] = [
    [7,6,5,5,3,2,2,0,0,-2,-2,-3,-5,-5,-6,-7,-7,-8,-9,-9,-9,-10,-10,-10,-10,-10,-10,-9,-9,-9,-8,-7,-7,-6,-5,-5,-3,-2,-2,0,0,2,2,3,5,5,6,7,7,8,9,9,9,10,10,10,10,10,10,9,9,9,8,7],
    [21,20,19,19,15,14,14,10,10,6,6,3,-1,-1,-4,-7,-7,-10,-13,-13,-15,-18,-18,-20,-20,-22,-22,-21,-23,-23,-22,-21,-21,-20,-19,-19,-15,-14,-14,-10,-10,-6,-6,-3,1,1,4,7,7,10,13,13,15,18,18,20,20,22,22,21,23,23,22,21],
    [-7,-8,-9,-9,-9,-10,-10,-10,-10,-10,-10,-9,-9,-9,-8,-7,-7,-6,-5,-5,-3,-2,-2,0,0,2,2,3,5,5,6,7,7,8,9,9,9,10,10,10,10,10,10,9,9,9,8,7,7,6,5,5,3,2,2,0,0,-2,-2,-3,-5,-5,-6,-7],
    [-21,-22,-23,-23,-21,-22,-22,-20,-20,-18,-18,-15,-13,-13,-10,-7,-7,-4,-1,-1,3,6,6,10,10,14,14,15,19,19,20,21,21,22,23,23,21,22,22,20,20,18,18,15,13,13,10,7,7,4,1,1,-3,-6,-6,-10,-10,-14,-14,-15,-19,-19,-20,-21],
    [7,4,1,1,-3,-6,-6,-10,-10,-14,-14,-15,-19,-19,-20,-21,-21,-22,-23,-23,-21,-22,-22,-20,-20,-18,-18,-15,-13,-13,-10,-7,-7,-4,-1,-1,3,6,6,10,10,14,14,15,19,19,20,21,21,22,23,23,21,22,22,20,20,18,18,15,13,13,10,7],
    [21,18,15,15,9,6,6,0,0,-6,-6,-9,-15,-15,-18,-21,-21,-24,-27,-27,-27,-30,-30,-30,-30,-30,-30,-27,-27,-27,-24,-21,-21,-18,-15,-15,-9,-6,-6,0,0,6,6,9,15,15,18,21,21,24,27,27,27,30,30,30,30,30,30,27,27,27,24,21],
    [-7,-10,-13,-13,-15,-18,-18,-20,-20,-22,-22,-21,-23,-23,-22,-21,-21,-20,-19,-19,-15,-14,-14,-10,-10,-6,-6,-3,1,1,4,7,7,10,13,13,15,18,18,20,20,22,22,21,23,23,22,21,21,20,19,19,15,14,14,10,10,6,6,3,-1,-1,-4,-7],
    [-21,-24,-27,-27,-27,-30,-30,-30,-30,-30,-30,-27,-27,-27,-24,-21,-21,-18,-15,-15,-9,-6,-6,0,0,6,6,9,15,15,18,21,21,24,27,27,27,30,30,30,30,30,30,27,27,27,24,21,21,18,15,15,9,6,6,0,0,-6,-6,-9,-15,-15,-18,-21],
    [7,8,9,9,9,10,10,10,10,10,10,9,9,9,8,7,7,6,5,5,3,2,2,0,0,-2,-2,-3,-5,-5,-6,-7,-7,-8,-9,-9,-9,-10,-10,-10,-10,-10,-10,-9,-9,-9,-8,-7,-7,-6,-5,-5,-3,-2,-2,0,0,2,2,3,5,5,6,7],
    [21,22,23,23,21,22,22,20,20,18,18,15,13,13,10,7,7,4,1,1,-3,-6,-6,-10,-10,-14,-14,-15,-19,-19,-20,-21,-21,-22,-23,-23,-21,-22,-22,-20,-20,-18,-18,-15,-13,-13,-10,-7,-7,-4,-1,-1,3,6,6,10,10,14,14,15,19,19,20,21],
    [-7,-6,-5,-5,-3,-2,-2,0,0,2,2,3,5,5,6,7,7,8,9,9,9,10,10,10,10,10,10,9,9,9,8,7,7,6,5,5,3,2,2,0,0,-2,-2,-3,-5,-5,-6,-7,-7,-8,-9,-9,-9,-10,-10,-10,-10,-10,-10,-9,-9,-9,-8,-7],
    [-21,-20,-19,-19,-15,-14,-14,-10,-10,-6,-6,-3,1,1,4,7,7,10,13,13,15,18,18,20,20,22,22,21,23,23,22,21,21,20,19,19,15,14,14,10,10,6,6,3,-1,-1,-4,-7,-7,-10,-13,-13,-15,-18,-18,-20,-20,-22,-22,-21,-23,-23,-22,-21],
    [7,10,13,13,15,18,18,20,20,22,22,21,23,23,22,21,21,20,19,19,15,14,14,10,10,6,6,3,-1,-1,-4,-7,-7,-10,-13,-13,-15,-18,-18,-20,-20,-22,-22,-21,-23,-23,-22,-21,-21,-20,-19,-19,-15,-14,-14,-10,-10,-6,-6,-3,1,1,4,7],
    [21,24,27,27,27,30,30,30,30,30,30,27,27,27,24,21,21,18,15,15,9,6,6,0,0,-6,-6,-9,-15,-15,-18,-21,-21,-24,-27,-27,-27,-30,-30,-30,-30,-30,-30,-27,-27,-27,-24,-21,-21,-18,-15,-15,-9,-6,-6,0,0,6,6,9,15,15,18,21],
    [-7,-4,-1,-1,3,6,6,10,10,14,14,15,19,19,20,21,21,22,23,23,21,22,22,20,20,18,18,15,13,13,10,7,7,4,1,1,-3,-6,-6,-10,-10,-14,-14,-15,-19,-19,-20,-21,-21,-22,-23,-23,-21,-22,-22,-20,-20,-18,-18,-15,-13,-13,-10,-7],
    [-21,-18,-15,-15,-9,-6,-6,0,0,6,6,9,15,15,18,21,21,24,27,27,27,30,30,30,30,30,30,27,27,27,24,21,21,18,15,15,9,6,6,0,0,-6,-6,-9,-15,-15,-18,-21,-21,-24,-27,-27,-27,-30,-30,-30,-30,-30,-30,-27,-27,-27,-24,-21],
];

/// Quarter-period sine LUT driving the 8-point coherent DFT's twiddle
/// factors (§4.4). `DFT_TABLE[i] == DFT_TABLE[128-i]` for `i` in `(0, 64)`.
#[rustfmt::skip]
pub const DFT_TABLE: [i32; 128] = [
    0, 13, 25, 38, 50, 63, 75, 87, 100, 112, 124, 136, 148, 160, 172, 184,
    196, 207, 218, 230, 241, 252, 263, 273, 284, 294, 304, 314, 324, 334, 343, 352,
    361, 370, 379, 387, 395, 403, 410, 418, 425, 432, 438, 445, 451, 456, 462, 467,
    472, 477, 481, 485, 489, 492, 496, 499, 501, 503, 505, 507, 509, 510, 510, 511,
    511, 511, 510, 510, 509, 507, 505, 503, 501, 499, 496, 492, 489, 485, 481, 477,
    472, 467, 462, 456, 451, 445, 438, 432, 425, 418, 410, 403, 395, 387, 379, 370,
    361, 352, 343, 334, 324, 314, 304, 294, 284, 273, 263, 252, 241, 230, 218, 207,
    196, 184, 172, 160, 148, 136, 124, 112, 100, 87, 75, 63, 50, 38, 25, 13,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixer_half_period_antisymmetry() {
        for s in 0..16 {
            for p in 0..32 {
                assert_eq!(MIXER_I[s][p + 32], -MIXER_I[s][p]);
                assert_eq!(MIXER_Q[s][p + 32], -MIXER_Q[s][p]);
            }
        }
    }

    #[test]
    fn dft_table_symmetry_and_endpoints() {
        assert_eq!(DFT_TABLE[0], 0);
        assert_eq!(DFT_TABLE[64], 511);
        for i in 1..64 {
            assert_eq!(DFT_TABLE[i], DFT_TABLE[128 - i]);
        }
    }

    #[test]
    fn prn_poly_settings_match_tap_positions() {
        let g1_mask = PRN_POLY_SETTINGS[0] & 0x3fff;
        let g2_mask = (PRN_POLY_SETTINGS[0] >> 14) & 0x3fff;
        assert_eq!(g1_mask, 0x204);
        assert_eq!(g2_mask, 0x3a6);
    }
}
