use avtp_crf::protocol::avtp::crf::{CrfField, CrfPdu};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn crf_field_benchmark(c: &mut Criterion) {
    let mut pdu = CrfPdu::new().unwrap();
    pdu.set(CrfField::BaseFreq, 48_000).unwrap();
    pdu.set(CrfField::CrfDataLen, 48).unwrap();

    c.bench_function("crf_get_base_freq", |b| {
        b.iter(|| pdu.get(black_box(CrfField::BaseFreq)).unwrap())
    });

    c.bench_function("crf_set_seq_num", |b| {
        let mut pdu = pdu;
        b.iter(|| pdu.set(CrfField::SeqNum, black_box(200)).unwrap())
    });

    c.bench_function("crf_set_base_freq", |b| {
        let mut pdu = pdu;
        b.iter(|| pdu.set(CrfField::BaseFreq, black_box(96_000)).unwrap())
    });
}

fn crf_header_benchmark(c: &mut Criterion) {
    let encoded = CrfPdu::new().unwrap().encode();

    c.bench_function("crf_init", |b| b.iter(|| CrfPdu::new().unwrap()));

    c.bench_function("crf_decode", |b| {
        b.iter(|| CrfPdu::decode(black_box(&encoded)).unwrap())
    });
}

criterion_group!(benches, crf_field_benchmark, crf_header_benchmark);
criterion_main!(benches);
