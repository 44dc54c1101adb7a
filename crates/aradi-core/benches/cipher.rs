use criterion::{criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aradi_core::{decrypt_block, encrypt_block, expand_key, Aradi256Key, Block};

fn bench_key_schedule(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let key = Aradi256Key::from(rng.gen::<[u32; 8]>());

    let mut group = c.benchmark_group("key_schedule");
    group.bench_function("expand_key", |b| {
        b.iter(|| expand_key(&key));
    });
    group.finish();
}

fn bench_block(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let key = Aradi256Key::from(rng.gen::<[u32; 8]>());
    let round_keys = expand_key(&key);
    let block: Block = rng.gen();
    let ct = encrypt_block(&block, &round_keys);

    let mut group = c.benchmark_group("block");
    group.bench_function("encrypt_block", |b| {
        b.iter(|| encrypt_block(&block, &round_keys));
    });
    group.bench_function("decrypt_block", |b| {
        b.iter(|| decrypt_block(&ct, &round_keys));
    });
    group.finish();
}

criterion_group!(benches, bench_key_schedule, bench_block);
criterion_main!(benches);
