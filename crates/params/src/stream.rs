//! Constants for the keystream engines

/// Key size shared by every engine in bytes
pub const KEY_SIZE: usize = 32;

/// Key size in 32-bit words
pub const KEY_WORDS: usize = KEY_SIZE / 4;

/// Words per keystream block
pub const BLOCK_WORDS: usize = 16;

/// Keystream block size in bytes
pub const BLOCK_SIZE: usize = BLOCK_WORDS * 4;

// =============================================================================
// Salsa/ChaCha family
// =============================================================================

/// Salsa20 IV size in bytes
pub const SALSA20_IV_SIZE: usize = 8;

/// ChaCha20 IV size in bytes
pub const CHACHA20_IV_SIZE: usize = 8;

/// IV size in bytes for the Salsa/ChaCha family
pub const ARX_IV_SIZE: usize = 8;

/// IV size in 32-bit words for the Salsa/ChaCha family
pub const ARX_IV_WORDS: usize = ARX_IV_SIZE / 4;

/// Double rounds per block (20 rounds)
pub const ARX_DOUBLE_ROUNDS: usize = 10;

/// "expand 32-byte k" as four little-endian words
pub const SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

// =============================================================================
// HC-256
// =============================================================================

/// HC-256 IV size in bytes
pub const HC256_IV_SIZE: usize = 32;

/// HC-256 IV size in 32-bit words
pub const HC256_IV_WORDS: usize = HC256_IV_SIZE / 4;

/// Words in each of the P and Q tables
pub const HC256_TABLE_SIZE: usize = 1024;

/// Index mask for the P and Q tables
pub const HC256_TABLE_MASK: usize = HC256_TABLE_SIZE - 1;

/// Length of the expansion buffer used to seed P and Q
pub const HC256_INIT_WORDS: usize = 2660;

/// Offset of the P seed inside the expansion buffer
pub const HC256_P_OFFSET: usize = 512;

/// Offset of the Q seed inside the expansion buffer
pub const HC256_Q_OFFSET: usize = HC256_P_OFFSET + HC256_TABLE_SIZE;

/// Words generated and discarded after seeding, before the first output
pub const HC256_WARMUP_WORDS: usize = 4096;
