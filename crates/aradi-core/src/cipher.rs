//! ARADI key schedule and block encryption/decryption.

use crate::block::Block;
use crate::key::{Aradi256Key, RoundKeys};
use crate::round::{add_round_key, inv_sbox_layer, linear_layer, m0, m1, sbox_layer};

/// Number of full S-box/linear rounds; one extra whitening key follows.
const ROUNDS: usize = 16;

fn mix_key_words(key: &[u32; 8]) -> [u32; 8] {
    let (t0, t1) = m0(key[0], key[1]);
    let (t2, t3) = m1(key[2], key[3]);
    let (t4, t5) = m0(key[4], key[5]);
    let (t6, t7) = m1(key[6], key[7]);
    [t0, t1, t2, t3, t4, t5, t6, t7]
}

/// One key-state update. The reassembly permutation alternates with the
/// parity of the injected counter; the counter lands in the last word only.
fn key_update(key: &[u32; 8], counter: u32) -> [u32; 8] {
    let [t0, t1, t2, t3, t4, t5, t6, t7] = mix_key_words(key);
    if counter % 2 == 0 {
        [t0, t2, t1, t3, t4, t6, t5, t7 ^ counter]
    } else {
        [t0, t4, t2, t6, t1, t5, t3, t7 ^ counter]
    }
}

/// Expands a 256-bit key into the 17 round keys.
///
/// Round key 0 is always the first four words of the master key; round key
/// `i` is the high half of the `i`-th key state when `i` is odd and the low
/// half when `i` is even.
pub fn expand_key(key: &Aradi256Key) -> RoundKeys {
    let mut state = key.0;
    let mut round_keys = [[0u32; 4]; 17];

    round_keys[0].copy_from_slice(&state[..4]);
    for i in 1..=ROUNDS {
        state = key_update(&state, (i - 1) as u32);
        let half = if i % 2 == 1 {
            &state[4..]
        } else {
            &state[..4]
        };
        round_keys[i].copy_from_slice(half);
    }

    RoundKeys(round_keys)
}

/// Encrypts a single 128-bit block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    for round in 0..ROUNDS {
        add_round_key(&mut state, round_keys.get(round));
        sbox_layer(&mut state);
        linear_layer(round % 4, &mut state);
    }
    add_round_key(&mut state, round_keys.get(ROUNDS));

    state
}

/// Decrypts a single 128-bit block with pre-expanded round keys.
///
/// The linear layer is applied with the same forward map as encryption; the
/// inversion comes from running the round composition in reverse order with
/// the inverse S-box.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(ROUNDS));
    for round in (0..ROUNDS).rev() {
        linear_layer(round % 4, &mut state);
        inv_sbox_layer(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    state
}
