// Build pipeline benchmarks.
//
// Covers address decoding per family, script resolution, serialization
// and the full unsigned build.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use rawtx_core::address::decode_address;
use rawtx_core::encoding::encode_varint;
use rawtx_core::script::Script;
use rawtx_core::transaction::{
    build_unsigned_transaction, BuildParams, TransactionBuilder, TxInput, Txid,
};

const PREV_TXID: &str = "c30b486d2c65299a1df82d851adac158a0ec5c40aad20d9d7905c1c3aed44f49";

const ADDRESSES: &[(&str, &str)] = &[
    ("p2pkh", "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH"),
    ("p2sh", "39C7fxSzEACPjM78Z7xdPxhf7mKxJwvfMJ"),
    ("p2wpkh", "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4"),
    (
        "p2tr",
        "bc1p0xlxvlhemja6c4dqv22uapctqupfhlxm9h8z3k2e72q4k9hcz7vqzk5jj0",
    ),
];

fn bench_decode_address(c: &mut Criterion) {
    let mut group = c.benchmark_group("address/decode");
    for (family, address) in ADDRESSES {
        group.bench_with_input(BenchmarkId::from_parameter(family), address, |b, addr| {
            b.iter(|| decode_address(black_box(addr)));
        });
    }
    group.finish();
}

fn bench_varint(c: &mut Criterion) {
    c.bench_function("varint/encode_u32_range", |b| {
        b.iter(|| encode_varint(black_box(0x1234_5678)));
    });
}

fn bench_full_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build/unsigned");
    for (family, address) in ADDRESSES {
        let params = BuildParams::new(PREV_TXID, 0, 20_000, *address, 20);
        group.bench_with_input(BenchmarkId::from_parameter(family), &params, |b, p| {
            b.iter(|| build_unsigned_transaction(black_box(p)));
        });
    }
    group.finish();
}

fn bench_serialize_many_inputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize/inputs");
    let prev = Txid::from_hex(PREV_TXID).expect("valid txid");

    for count in [1usize, 10, 100, 1_000] {
        let tx = (0..count as u32)
            .fold(TransactionBuilder::new(), |builder, vout| {
                builder.input(TxInput::unsigned(prev, vout))
            })
            .output(1_000, Script::p2sh(&[0u8; 20]))
            .build();

        group.throughput(Throughput::Bytes(tx.size() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &tx, |b, tx| {
            b.iter(|| tx.serialize());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_decode_address,
    bench_varint,
    bench_full_build,
    bench_serialize_many_inputs,
);
criterion_main!(benches);
