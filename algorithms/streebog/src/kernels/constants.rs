//! Streebog Kernel Constants
//!
//! All tables are taken verbatim from GOST R 34.11-2012. Vectors and 64-bit
//! words are written most-significant first, which is also the byte order of
//! the internal 512-bit state.

// =============================================================================
// STRUCTURAL CONSTANTS
// =============================================================================

/// Size of one message block and of every internal state vector (in bytes).
pub const BLOCK_SIZE: usize = 64;

/// Bit length of a full message block.
pub const BLOCK_BITS: u16 = 512;

/// Number of rounds in the `E` transformation.
pub const ROUNDS: usize = 12;

/// Output size of Streebog-256 (in bytes).
pub const HASH_SIZE_256: usize = 32;

/// Output size of Streebog-512 (in bytes).
pub const HASH_SIZE_512: usize = 64;

// =============================================================================
// INITIALIZATION VECTORS
// =============================================================================

/// Initial chaining value for Streebog-256.
pub const IV_256: [u8; BLOCK_SIZE] = [0x01; BLOCK_SIZE];

/// Initial chaining value for Streebog-512.
pub const IV_512: [u8; BLOCK_SIZE] = [0x00; BLOCK_SIZE];

// =============================================================================
// S-TRANSFORMATION
// =============================================================================

/// Nonlinear bijection π′ over byte values.
#[rustfmt::skip]
pub const SBOX: [u8; 256] = [
    0xfc, 0xee, 0xdd, 0x11, 0xcf, 0x6e, 0x31, 0x16, 0xfb, 0xc4, 0xfa, 0xda, 0x23, 0xc5, 0x04, 0x4d,
    0xe9, 0x77, 0xf0, 0xdb, 0x93, 0x2e, 0x99, 0xba, 0x17, 0x36, 0xf1, 0xbb, 0x14, 0xcd, 0x5f, 0xc1,
    0xf9, 0x18, 0x65, 0x5a, 0xe2, 0x5c, 0xef, 0x21, 0x81, 0x1c, 0x3c, 0x42, 0x8b, 0x01, 0x8e, 0x4f,
    0x05, 0x84, 0x02, 0xae, 0xe3, 0x6a, 0x8f, 0xa0, 0x06, 0x0b, 0xed, 0x98, 0x7f, 0xd4, 0xd3, 0x1f,
    0xeb, 0x34, 0x2c, 0x51, 0xea, 0xc8, 0x48, 0xab, 0xf2, 0x2a, 0x68, 0xa2, 0xfd, 0x3a, 0xce, 0xcc,
    0xb5, 0x70, 0x0e, 0x56, 0x08, 0x0c, 0x76, 0x12, 0xbf, 0x72, 0x13, 0x47, 0x9c, 0xb7, 0x5d, 0x87,
    0x15, 0xa1, 0x96, 0x29, 0x10, 0x7b, 0x9a, 0xc7, 0xf3, 0x91, 0x78, 0x6f, 0x9d, 0x9e, 0xb2, 0xb1,
    0x32, 0x75, 0x19, 0x3d, 0xff, 0x35, 0x8a, 0x7e, 0x6d, 0x54, 0xc6, 0x80, 0xc3, 0xbd, 0x0d, 0x57,
    0xdf, 0xf5, 0x24, 0xa9, 0x3e, 0xa8, 0x43, 0xc9, 0xd7, 0x79, 0xd6, 0xf6, 0x7c, 0x22, 0xb9, 0x03,
    0xe0, 0x0f, 0xec, 0xde, 0x7a, 0x94, 0xb0, 0xbc, 0xdc, 0xe8, 0x28, 0x50, 0x4e, 0x33, 0x0a, 0x4a,
    0xa7, 0x97, 0x60, 0x73, 0x1e, 0x00, 0x62, 0x44, 0x1a, 0xb8, 0x38, 0x82, 0x64, 0x9f, 0x26, 0x41,
    0xad, 0x45, 0x46, 0x92, 0x27, 0x5e, 0x55, 0x2f, 0x8c, 0xa3, 0xa5, 0x7d, 0x69, 0xd5, 0x95, 0x3b,
    0x07, 0x58, 0xb3, 0x40, 0x86, 0xac, 0x1d, 0xf7, 0x30, 0x37, 0x6b, 0xe4, 0x88, 0xd9, 0xe7, 0x89,
    0xe1, 0x1b, 0x83, 0x49, 0x4c, 0x3f, 0xf8, 0xfe, 0x8d, 0x53, 0xaa, 0x90, 0xca, 0xd8, 0x85, 0x61,
    0x20, 0x71, 0x67, 0xa4, 0x2d, 0x2b, 0x09, 0x5b, 0xcb, 0x9b, 0x25, 0xd0, 0xbe, 0xe5, 0x6c, 0x52,
    0x59, 0xa6, 0x74, 0xd2, 0xe6, 0xf4, 0xb4, 0xc0, 0xd1, 0x66, 0xaf, 0xc2, 0x39, 0x4b, 0x63, 0xb6,
];

// =============================================================================
// P-TRANSFORMATION
// =============================================================================

/// Byte permutation τ: output byte `i` is taken from input byte `TAU[i]`.
///
/// Equivalent to transposing the state viewed as an 8×8 byte matrix.
#[rustfmt::skip]
pub const TAU: [u8; BLOCK_SIZE] = [
     0,  8, 16, 24, 32, 40, 48, 56,
     1,  9, 17, 25, 33, 41, 49, 57,
     2, 10, 18, 26, 34, 42, 50, 58,
     3, 11, 19, 27, 35, 43, 51, 59,
     4, 12, 20, 28, 36, 44, 52, 60,
     5, 13, 21, 29, 37, 45, 53, 61,
     6, 14, 22, 30, 38, 46, 54, 62,
     7, 15, 23, 31, 39, 47, 55, 63,
];

// =============================================================================
// L-TRANSFORMATION
// =============================================================================

/// Rows of the 64×64 matrix `A` over GF(2).
///
/// Bit 63 of a lane selects `LINEAR_MATRIX[0]`, bit 0 selects `LINEAR_MATRIX[63]`.
/// Rows `8p..8p + 8` are the constants selected by byte `p` of the lane.
#[rustfmt::skip]
pub const LINEAR_MATRIX: [u64; 64] = [
    0x8E20_FAA7_2BA0_B470, 0x4710_7DDD_9B50_5A38, 0xAD08_B0E0_C328_2D1C, 0xD804_5870_EF14_980E,
    0x6C02_2C38_F90A_4C07, 0x3601_161C_F205_268D, 0x1B8E_0B0E_798C_13C8, 0x8347_8B07_B246_8764,
    0xA011_D380_818E_8F40, 0x5086_E740_CE47_C920, 0x2843_FD20_67AD_EA10, 0x14AF_F010_BDD8_7508,
    0x0AD9_7808_D06C_B404, 0x05E2_3C04_6836_5A02, 0x8C71_1E02_341B_2D01, 0x46B6_0F01_1A83_988E,
    0x90DA_B52A_387A_E76F, 0x486D_D415_1C3D_FDB9, 0x24B8_6A84_0E90_F0D2, 0x125C_3542_0748_7869,
    0x092E_9421_8D24_3CBA, 0x8A17_4A9E_C812_1E5D, 0x4585_254F_6409_0FA0, 0xACCC_9CA9_328A_8950,
    0x9D4D_F05D_5F66_1451, 0xC0A8_78A0_A133_0AA6, 0x6054_3C50_DE97_0553, 0x302A_1E28_6FC5_8CA7,
    0x1815_0F14_B9EC_46DD, 0x0C84_890A_D276_23E0, 0x0642_CA05_693B_9F70, 0x0321_658C_BA93_C138,
    0x8627_5DF0_9CE8_AAA8, 0x439D_A078_4E74_5554, 0xAFC0_503C_273A_A42A, 0xD960_281E_9D1D_5215,
    0xE230_140F_C080_2984, 0x7118_0A89_6040_9A42, 0xB60C_05CA_3020_4D21, 0x5B06_8C65_1810_A89E,
    0x456C_3488_7A38_05B9, 0xAC36_1A44_3D1C_8CD2, 0x561B_0D22_900E_4669, 0x2B83_8811_4807_23BA,
    0x9BCF_4486_248D_9F5D, 0xC3E9_2243_12C8_C1A0, 0xEFFA_11AF_0964_EE50, 0xF97D_86D9_8A32_7728,
    0xE4FA_2054_A80B_329C, 0x727D_102A_548B_194E, 0x39B0_0815_2ACB_8227, 0x9258_0484_15EB_419D,
    0x492C_0242_84FB_AEC0, 0xAA16_0121_42F3_5760, 0x550B_8E9E_21F7_A530, 0xA48B_474F_9EF5_DC18,
    0x70A6_A56E_2440_598E, 0x3853_DC37_1220_A247, 0x1CA7_6E95_0910_51AD, 0x0EDD_37C4_8A08_A6D8,
    0x07E0_9562_4504_536C, 0x8D70_C431_AC02_A736, 0xC838_6296_5601_DD1B, 0x641C_314B_2B8E_E083,
];

// =============================================================================
// KEY SCHEDULE
// =============================================================================

/// Iteration constants `C1..C12`, one per round, as big-endian 64-bit words
/// (word 0 is the most significant).
#[rustfmt::skip]
pub const ROUND_CONSTANTS: [[u64; 8]; 12] = [
    [
        0xB108_5BDA_1ECA_DAE9, 0xEBCB_2F81_C065_7C1F, 0x2F6A_7643_2E45_D016, 0x714E_B88D_7585_C4FC,
        0x4B7C_E091_9267_6901, 0xA242_2A08_A460_D315, 0x0576_7436_CC74_4D23, 0xDD80_6559_F2A6_4507,
    ],
    [
        0x6FA3_B58A_A99D_2F1A, 0x4FE3_9D46_0F70_B5D7, 0xF3FE_EA72_0A23_2B98, 0x61D5_5E0F_16B5_0131,
        0x9AB5_176B_12D6_9958, 0x5CB5_61C2_DB0A_A7CA, 0x55DD_A21B_D7CB_CD56, 0xE679_0470_21B1_9BB7,
    ],
    [
        0xF574_DCAC_2BCE_2FC7, 0x0A39_FC28_6A3D_8435, 0x06F1_5E5F_529C_1F8B, 0xF2EA_7514_B129_7B7B,
        0xD3E2_0FE4_9035_9EB1, 0xC1C9_3A37_6062_DB09, 0xC2B6_F443_867A_DB31, 0x991E_96F5_0ABA_0AB2,
    ],
    [
        0xEF1F_DFB3_E815_66D2, 0xF948_E1A0_5D71_E4DD, 0x488E_857E_335C_3C7D, 0x9D72_1CAD_685E_353F,
        0xA9D7_2C82_ED03_D675, 0xD8B7_1333_9352_03BE, 0x3453_EAA1_93E8_37F1, 0x220C_BEBC_84E3_D12E,
    ],
    [
        0x4BEA_6BAC_AD47_4799, 0x9A3F_410C_6CA9_2363, 0x7F15_1C1F_1686_104A, 0x359E_35D7_800F_FFBD,
        0xBFCD_1747_253A_F5A3, 0xDFFF_00B7_2327_1A16, 0x7A56_A27E_A9EA_63F5, 0x6017_58FD_7C6C_FE57,
    ],
    [
        0xAE4F_AEAE_1D3A_D3D9, 0x6FA4_C33B_7A30_39C0, 0x2D66_C4F9_5142_A46C, 0x187F_9AB4_9AF0_8EC6,
        0xCFFA_A6B7_1C9A_B7B4, 0x0AF2_1F66_C2BE_C6B6, 0xBF71_C572_3690_4F35, 0xFA68_407A_4664_7D6E,
    ],
    [
        0xF4C7_0E16_EEAA_C5EC, 0x51AC_86FE_BF24_0954, 0x399E_C6C7_E6BF_87C9, 0xD347_3E33_197A_93C9,
        0x0992_ABC5_2D82_2C37, 0x0647_6983_284A_0504, 0x3517_454C_A23C_4AF3, 0x8886_564D_3A14_D493,
    ],
    [
        0x9B1F_5B42_4D93_C9A7, 0x03E7_AA02_0C6E_4141, 0x4EB7_F871_9C36_DE1E, 0x89B4_443B_4DDB_C49A,
        0xF489_2BCB_929B_0690, 0x69D1_8D2B_D1A5_C42F, 0x36AC_C235_5951_A8D9, 0xA47F_0DD4_BF02_E71E,
    ],
    [
        0x378F_5A54_1631_229B, 0x944C_9AD8_EC16_5FDE, 0x3A7D_3A1B_2589_4224, 0x3CD9_55B7_E00D_0984,
        0x800A_440B_DBB2_CEB1, 0x7B2B_8A9A_A607_9C54, 0x0E38_DC92_CB1F_2A60, 0x7261_4451_8323_5ADB,
    ],
    [
        0xABBE_DEA6_8005_6F52, 0x382A_E548_B2E4_F3F3, 0x8941_E71C_FF8A_78DB, 0x1FFF_E18A_1B33_6103,
        0x9FE7_6702_AF69_334B, 0x7A1E_6C30_3B76_52F4, 0x3698_FAD1_153B_B6C3, 0x74B4_C7FB_9845_9CED,
    ],
    [
        0x7BCD_9ED0_EFC8_89FB, 0x3002_C6CD_635A_FE94, 0xD8FA_6BBB_EBAB_0761, 0x2001_8021_1484_6679,
        0x8A1D_71EF_EA48_B9CA, 0xEFBA_CD1D_7D47_6E98, 0xDEA2_594A_C06F_D85D, 0x6BCA_A4CD_81F3_2D1B,
    ],
    [
        0x378E_E767_F116_31BA, 0xD213_80B0_0449_B17A, 0xCDA4_3C32_BCDF_1D77, 0xF820_12D4_3021_9F9B,
        0x5D80_EF9D_1891_CC86, 0xE71D_A4AA_88E1_2852, 0xFAF4_17D5_D9B2_1B99, 0x48BC_924A_F11B_D720,
    ],
];
